//! Locally declared configuration for each entity kind.
//!
//! These are the shapes the lifecycle layer reads from and writes back to.
//! Computed fields (`account_id`, `derived_id`, ...) are filled in by reads.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the mutually exclusive criteria a selector matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriteriaKind {
    Postback,
    PathPrefix,
    PathRegex,
}

impl CriteriaKind {
    pub const ALL: [Self; 3] = [Self::Postback, Self::PathPrefix, Self::PathRegex];

    /// Field name used on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Postback => "postback",
            Self::PathPrefix => "path_prefix",
            Self::PathRegex => "path_regex",
        }
    }
}

impl fmt::Display for CriteriaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CriteriaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// The match condition of a selector. Exactly one variant is active.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Criteria {
    Postback(String),
    PathPrefix(String),
    PathRegex(String),
}

impl Criteria {
    #[must_use]
    pub fn new(kind: CriteriaKind, value: impl Into<String>) -> Self {
        let value = value.into();
        match kind {
            CriteriaKind::Postback => Self::Postback(value),
            CriteriaKind::PathPrefix => Self::PathPrefix(value),
            CriteriaKind::PathRegex => Self::PathRegex(value),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> CriteriaKind {
        match self {
            Self::Postback(_) => CriteriaKind::Postback,
            Self::PathPrefix(_) => CriteriaKind::PathPrefix,
            Self::PathRegex(_) => CriteriaKind::PathRegex,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Postback(v) | Self::PathPrefix(v) | Self::PathRegex(v) => v,
        }
    }
}

/// A site-scoped rule pairing a criteria with a policy and a rate limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selector {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    pub criteria: Criteria,
    pub analysis_rate_limiting: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_id: Option<String>,
}

impl Selector {
    /// A selector with no policy reference and no derived id.
    #[must_use]
    pub fn new(criteria: Criteria, analysis_rate_limiting: impl Into<String>) -> Self {
        Self {
            policy_id: None,
            criteria,
            analysis_rate_limiting: analysis_rate_limiting.into(),
            derived_id: None,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy_id: impl Into<String>) -> Self {
        self.policy_id = Some(policy_id.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub name: String,
    /// Set when the site belongs to a WAF gateway. Only sent on create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mx_hostname_id: Option<String>,
    #[serde(default)]
    pub selectors: Vec<Selector>,
}

/// A policy rule. An empty `condition_id` means "no condition".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub action: String,
    #[serde(default)]
    pub condition_id: String,
}

impl Directive {
    #[must_use]
    pub fn new(action: impl Into<String>, condition_id: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            condition_id: condition_id.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub directives: Vec<Directive>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(default)]
    pub site_id: String,
    pub challenge_ip_lookup_mode: String,
    #[serde(default)]
    pub analysis_ip_lookup_mode: String,
    /// Domain-name match expression. Only sent on create.
    #[serde(default)]
    pub criteria: String,
    #[serde(default)]
    pub cookie_scope: String,
    #[serde(default)]
    pub captcha_settings: String,
    /// One of `apac`, `australia`, `eu`, `usa`.
    #[serde(default)]
    pub log_region: String,
    #[serde(default)]
    pub obfuscate_path: String,
    #[serde(default)]
    pub mobile_api_obfuscate_path: String,
    #[serde(default)]
    pub cookie_mode: String,
    #[serde(default)]
    pub no_js_injection_paths: Vec<String>,
    /// Headers exempt from masking, in order.
    #[serde(default)]
    pub unmasked_headers: Vec<String>,
    /// Only sent on create.
    #[serde(default)]
    pub encryption_key_id: String,
}

/// Accounts are discovered, never declared; every field is computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub my_account_id: String,
}
