//! Identifier types used throughout the reconciler.
//!
//! Remote ids are opaque dash-delimited tokens. Only the segment count is
//! checked; the segments themselves are never interpreted.

use crate::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of dash-delimited segments in a resolved remote id.
pub const ID_SEGMENTS: usize = 5;

/// A resolved remote identifier (`xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` shaped).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StructuredId(String);

impl StructuredId {
    /// Parses a structured id, rejecting anything that is not exactly five segments.
    pub fn parse(raw: &str) -> Result<Self, TypesError> {
        let segments = raw.split('-').count();
        if segments == ID_SEGMENTS {
            Ok(Self(raw.to_string()))
        } else {
            Err(TypesError::MalformedId {
                raw: raw.to_string(),
                segments,
            })
        }
    }

    /// Returns the id as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StructuredId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StructuredId {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StructuredId {
    type Error = TypesError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StructuredId> for String {
    fn from(id: StructuredId) -> Self {
        id.0
    }
}

impl AsRef<str> for StructuredId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A caller-supplied identifier, classified once at the boundary.
///
/// The shape of the raw string decides the variant: five segments means the
/// caller already knows the remote id, anything else is a name to look up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceId {
    Resolved(StructuredId),
    Unresolved(String),
}

impl ResourceId {
    /// Classifies a raw identifier string.
    #[must_use]
    pub fn classify(raw: &str) -> Self {
        StructuredId::parse(raw).map_or_else(|_| Self::Unresolved(raw.to_string()), Self::Resolved)
    }

    /// Returns the resolved id, if any.
    #[must_use]
    pub const fn resolved(&self) -> Option<&StructuredId> {
        match self {
            Self::Resolved(id) => Some(id),
            Self::Unresolved(_) => None,
        }
    }

    /// Returns true if the identifier is already a remote id.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

impl From<&str> for ResourceId {
    fn from(raw: &str) -> Self {
        Self::classify(raw)
    }
}

impl From<StructuredId> for ResourceId {
    fn from(id: StructuredId) -> Self {
        Self::Resolved(id)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resolved(id) => write!(f, "{id}"),
            Self::Unresolved(name) => f.write_str(name),
        }
    }
}
