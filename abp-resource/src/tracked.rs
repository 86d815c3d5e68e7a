use abp_model::Anomaly;
use abp_types::{EntityKind, StructuredId};
use serde::{Deserialize, Serialize};

use crate::error::{ResourceError, ResourceResult};

/// A local resource: declared state plus, once bound, its remote id.
///
/// Serializes with the state fields flattened next to `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tracked<S> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<StructuredId>,
    #[serde(flatten)]
    pub state: S,
    /// Irregularities met by the last read.
    #[serde(skip)]
    pub anomalies: Vec<Anomaly>,
}

impl<S> Tracked<S> {
    /// A resource not yet known to the remote.
    pub const fn unbound(state: S) -> Self {
        Self {
            id: None,
            state,
            anomalies: Vec::new(),
        }
    }

    pub const fn bound(id: StructuredId, state: S) -> Self {
        Self {
            id: Some(id),
            state,
            anomalies: Vec::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> Option<&StructuredId> {
        self.id.as_ref()
    }

    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.id.is_some()
    }

    pub fn bind(&mut self, id: StructuredId) {
        self.id = Some(id);
    }

    /// Clears the remote id, returning the one that was bound.
    pub fn unbind(&mut self) -> Option<StructuredId> {
        self.id.take()
    }

    pub(crate) fn require_id(&self, kind: EntityKind) -> ResourceResult<StructuredId> {
        self.id.clone().ok_or(ResourceError::NotBound { kind })
    }

    pub(crate) fn require_unbound(&self, kind: EntityKind) -> ResourceResult<()> {
        match &self.id {
            Some(id) => Err(ResourceError::AlreadyBound {
                kind,
                id: id.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl<S: Default> Default for Tracked<S> {
    fn default() -> Self {
        Self::unbound(S::default())
    }
}
