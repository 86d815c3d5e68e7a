//! Request and response bodies of the bot-management API.
//!
//! Optional fields are omitted from requests when absent, never sent as `null`.
//! Response fields the remote may leave out default to empty.

use abp_types::StructuredId;
use serde::{Deserialize, Serialize};

/// `GET /botmanagement/v1/`: identifies the caller's account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub account_id: String,
}

/// List endpoints wrap their results in an `items` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

// ── Account ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: StructuredId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub my_account_id: String,
}

// ── Domain ──────────────────────────────────────────────────────

/// The mutable domain settings; this is the full `PUT` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSettings {
    #[serde(default)]
    pub site_id: String,
    #[serde(default)]
    pub challenge_ip_lookup_mode: String,
    #[serde(default)]
    pub analysis_ip_lookup_mode: String,
    #[serde(default, rename = "cookiescope")]
    pub cookie_scope: String,
    #[serde(default)]
    pub captcha_settings: String,
    #[serde(default)]
    pub log_region: String,
    #[serde(default)]
    pub no_js_injection_paths: Vec<String>,
    #[serde(default)]
    pub obfuscate_path: String,
    #[serde(default)]
    pub cookie_mode: String,
    #[serde(default)]
    pub unmasked_headers: Vec<String>,
}

pub type UpdateDomain = DomainSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDomain {
    #[serde(flatten)]
    pub settings: DomainSettings,
    pub criteria: String,
    pub encryption_key_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainResponse {
    pub id: StructuredId,
    #[serde(default)]
    pub account_id: String,
    #[serde(flatten)]
    pub settings: DomainSettings,
    #[serde(default)]
    pub criteria: String,
    #[serde(default)]
    pub encryption_key_id: String,
    #[serde(default)]
    pub mobile_api_obfuscate_path: String,
}

// ── Policy ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveWire {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_id: Option<String>,
}

/// Create and update share one body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub directives: Vec<DirectiveWire>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyResponse {
    pub id: StructuredId,
    #[serde(default)]
    pub account_id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub directives: Vec<DirectiveWire>,
}

// ── Site ────────────────────────────────────────────────────────

/// Selector criteria as a struct of optionals. At most one field may be set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postback: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_regex: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    #[serde(default)]
    pub rate_limiting: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    #[serde(default)]
    pub criteria: CriteriaWire,
    #[serde(default)]
    pub analysis_settings: AnalysisSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub derived_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSite {
    pub name: String,
    pub selectors: Vec<SelectorWire>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSite {
    pub name: String,
    pub selectors: Vec<SelectorWire>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mx_hostname_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteResponse {
    pub id: StructuredId,
    #[serde(default)]
    pub account_id: String,
    pub name: String,
    #[serde(default)]
    pub mx_hostname_id: Option<String>,
    #[serde(default)]
    pub selectors: Vec<SelectorWire>,
}
