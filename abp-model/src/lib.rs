//! Entity model for the bot-management reconciler.
//!
//! Defines everything that sits between the remote JSON and the lifecycle layer:
//! - [`wire`]: request/response bodies exactly as the remote API exchanges them
//! - [`state`]: the locally declared configuration of each entity, with
//!   [`Criteria`] as a true sum type
//! - [`codec`]: selector criteria and directive encoding, with recoverable [`Anomaly`] reporting
//! - [`convert`]: pure builders from local state to create/update bodies and back
//! - [`compare`]: structural equivalence between desired state and a fetched entity
//! - [`RemoteEntity`] / [`AccountScoped`]: which endpoints each entity lives under
//!
//! Nothing in this crate performs I/O.

pub mod codec;
pub mod compare;
pub mod convert;
mod entity;
pub mod state;
pub mod wire;

pub use codec::{Anomaly, CriteriaError, Decoded};
pub use entity::{AccountScoped, RemoteEntity};
pub use state::{
    AccountState, Criteria, CriteriaKind, Directive, DomainState, PolicyState, Selector, SiteState,
};
