use abp_client::ClientError;
use abp_types::{EntityKind, StructuredId};
use thiserror::Error;

pub type ResourceResult<T> = Result<T, ResourceError>;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Any failure fetching an id during import reads as "not found".
    #[error("{kind} {id} not found, cannot import")]
    ImportNotFound {
        kind: EntityKind,
        id: StructuredId,
        #[source]
        source: ClientError,
    },

    #[error("no {kind} named '{name}' found, cannot import")]
    NameNotFound { kind: EntityKind, name: String },

    #[error("{kind} has no name; import it by ID")]
    NameImportUnsupported { kind: EntityKind },

    #[error("'{id}' is not a valid {kind} ID")]
    InvalidImportId { kind: EntityKind, id: String },

    #[error("{kind} is not bound to a remote ID")]
    NotBound { kind: EntityKind },

    #[error("{kind} is already bound to {id}")]
    AlreadyBound { kind: EntityKind, id: StructuredId },
}

impl ResourceError {
    /// The underlying repository error, if any.
    #[must_use]
    pub const fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Client(err) | Self::ImportNotFound { source: err, .. } => Some(err),
            _ => None,
        }
    }
}
