//! Error types for the repository layer.

use crate::transport::TransportError;
use abp_types::EntityKind;
use std::fmt;
use thiserror::Error;

/// Result type for repository operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// The kind of remote call being made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Discover,
    Read,
    List,
    Create,
    Update,
    Delete,
}

/// A remote call on one entity kind, e.g. `read site` or `list policies`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operation {
    pub action: Action,
    pub kind: EntityKind,
}

impl Operation {
    #[must_use]
    pub const fn new(action: Action, kind: EntityKind) -> Self {
        Self { action, kind }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.action {
            Action::Discover => "discover",
            Action::Read => "read",
            Action::List => "list",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        };
        match self.action {
            Action::List => write!(f, "{verb} {}", self.kind.plural()),
            _ => write!(f, "{verb} {}", self.kind),
        }
    }
}

/// Errors surfaced by the repository. `target` names the entity id or the
/// parent scope the call was made against.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Rejected before any request was issued.
    #[error("{operation}: invalid argument: {reason}")]
    InvalidArgument { operation: Operation, reason: String },

    #[error("{operation} {target}: transport failure: {source}")]
    Transport {
        operation: Operation,
        target: String,
        #[source]
        source: TransportError,
    },

    #[error("{operation} {target}: not found: {body}")]
    NotFound {
        operation: Operation,
        target: String,
        body: String,
    },

    #[error("{operation} {target}: unexpected status {status}: {body}")]
    UnexpectedStatus {
        operation: Operation,
        target: String,
        status: u16,
        body: String,
    },

    #[error("{operation} {target}: failed to parse response: {source}. response: {body}")]
    Decode {
        operation: Operation,
        target: String,
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("{operation}: failed to encode request body: {source}")]
    Encode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// The operation that failed.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::InvalidArgument { operation, .. }
            | Self::Transport { operation, .. }
            | Self::NotFound { operation, .. }
            | Self::UnexpectedStatus { operation, .. }
            | Self::Decode { operation, .. }
            | Self::Encode { operation, .. } => *operation,
        }
    }

    /// The HTTP status, when a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The raw response body, when one was received.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::NotFound { body, .. }
            | Self::UnexpectedStatus { body, .. }
            | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
