//! Resource lifecycle for bot-management entities.
//!
//! A [`Tracked`] resource pairs declared state with an optional remote id.
//! Each entity kind implements [`Lifecycle`] (import, read, create, update,
//! delete) over an [`abp_client::AbpClient`]:
//!
//! | Kind | Type | Notes |
//! |---|---|---|
//! | Account | [`AccountResource`] | create discovers the caller's account; update and delete never touch the remote |
//! | Domain | [`DomainResource`] | import by ID only |
//! | Policy | [`PolicyResource`] | |
//! | Site | [`SiteResource`] | |
//!
//! [`plan`] and [`apply`] converge a resource on its declared state.

mod account;
mod domain;
mod error;
mod lifecycle;
mod policy;
pub mod reconcile;
pub mod resolver;
mod site;
mod tracked;

pub use account::AccountResource;
pub use domain::DomainResource;
pub use error::{ResourceError, ResourceResult};
pub use lifecycle::Lifecycle;
pub use policy::PolicyResource;
pub use reconcile::{Plan, apply, find_policy_matching, find_site_matching, plan};
pub use resolver::{NameMatches, partition_by_name};
pub use site::SiteResource;
pub use tracked::Tracked;
