//! Core type definitions for the bot-management reconciler.
//!
//! This crate defines the plugin-agnostic types shared by every layer:
//! - Structured remote identifiers and the resolved/unresolved split used on import
//! - The entity kinds the remote API exposes (account, domain, policy, site)
//!
//! Wire shapes and local state belong in `abp-model`, not here.

mod ids;
mod kind;

pub use ids::{ID_SEGMENTS, ResourceId, StructuredId};
pub use kind::EntityKind;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, TypesError>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    #[error("malformed identifier '{raw}': expected {ID_SEGMENTS} dash-delimited segments, got {segments}")]
    MalformedId { raw: String, segments: usize },

    #[error("unknown entity kind: {0}")]
    UnknownKind(String),
}
