use crate::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kinds of remote entity managed by the reconciler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Account,
    Domain,
    Policy,
    Site,
}

impl EntityKind {
    /// Path segment used by the remote API (`/botmanagement/v1/{segment}/...`).
    #[must_use]
    pub const fn path_segment(self) -> &'static str {
        match self {
            Self::Account => "account",
            Self::Domain => "domain",
            Self::Policy => "policy",
            Self::Site => "site",
        }
    }

    /// Plural form, used in log and error messages for listings.
    #[must_use]
    pub const fn plural(self) -> &'static str {
        match self {
            Self::Account => "accounts",
            Self::Domain => "domains",
            Self::Policy => "policies",
            Self::Site => "sites",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}

impl FromStr for EntityKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "account" => Ok(Self::Account),
            "domain" => Ok(Self::Domain),
            "policy" => Ok(Self::Policy),
            "site" => Ok(Self::Site),
            other => Err(TypesError::UnknownKind(other.to_string())),
        }
    }
}
