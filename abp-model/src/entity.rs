use crate::wire::{
    AccountResponse, CreateDomain, CreateSite, DomainResponse, PolicyRequest, PolicyResponse,
    SiteResponse, UpdateDomain, UpdateSite,
};
use abp_types::{EntityKind, StructuredId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// An entity fetchable at `/botmanagement/v1/{kind}/{id}`.
pub trait RemoteEntity: DeserializeOwned + Debug {
    const KIND: EntityKind;

    fn id(&self) -> &StructuredId;

    /// Human-readable name used for import by name. Not every kind has one.
    fn name(&self) -> Option<&str> {
        None
    }
}

/// An entity owned by an account: listed and created under
/// `/botmanagement/v1/account/{account_id}/{kind}`, updated and deleted by id.
pub trait AccountScoped: RemoteEntity {
    type Create: Serialize + Debug;
    type Update: Serialize + Debug;

    fn account_id(&self) -> &str;
}

impl RemoteEntity for AccountResponse {
    const KIND: EntityKind = EntityKind::Account;

    fn id(&self) -> &StructuredId {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl RemoteEntity for DomainResponse {
    const KIND: EntityKind = EntityKind::Domain;

    fn id(&self) -> &StructuredId {
        &self.id
    }
}

impl AccountScoped for DomainResponse {
    type Create = CreateDomain;
    type Update = UpdateDomain;

    fn account_id(&self) -> &str {
        &self.account_id
    }
}

impl RemoteEntity for PolicyResponse {
    const KIND: EntityKind = EntityKind::Policy;

    fn id(&self) -> &StructuredId {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl AccountScoped for PolicyResponse {
    type Create = PolicyRequest;
    type Update = PolicyRequest;

    fn account_id(&self) -> &str {
        &self.account_id
    }
}

impl RemoteEntity for SiteResponse {
    const KIND: EntityKind = EntityKind::Site;

    fn id(&self) -> &StructuredId {
        &self.id
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl AccountScoped for SiteResponse {
    type Create = CreateSite;
    type Update = UpdateSite;

    fn account_id(&self) -> &str {
        &self.account_id
    }
}
