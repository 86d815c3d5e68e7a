use abp_client::{AbpClient, Transport};
use abp_model::compare::domain_equivalent;
use abp_model::convert::{domain_create_request, domain_state, domain_update_request};
use abp_model::wire::DomainResponse;
use abp_model::{Decoded, DomainState};
use abp_types::{EntityKind, ResourceId, StructuredId};
use tracing::info;

use crate::error::{ResourceError, ResourceResult};
use crate::lifecycle::{
    Lifecycle, create_entity, delete_entity, fetch_bound, read_entity, resolve_ids, update_entity,
};
use crate::tracked::Tracked;

/// Protected domains. They carry no name, so import is by id only.
pub struct DomainResource<'c, T> {
    client: &'c AbpClient<T>,
}

impl<'c, T: Transport> DomainResource<'c, T> {
    pub const fn new(client: &'c AbpClient<T>) -> Self {
        Self { client }
    }
}

impl<T: Transport> Lifecycle for DomainResource<'_, T> {
    type State = DomainState;

    const KIND: EntityKind = EntityKind::Domain;

    fn resolve(&self, id: &ResourceId) -> ResourceResult<Vec<StructuredId>> {
        if !id.is_resolved() {
            return Err(ResourceError::NameImportUnsupported { kind: Self::KIND });
        }
        resolve_ids::<DomainResponse, T>(self.client, id)
    }

    fn read(&self, tracked: &mut Tracked<DomainState>) -> ResourceResult<()> {
        read_entity(self.client, tracked, |remote: &DomainResponse| {
            Decoded::clean(domain_state(remote))
        })
    }

    fn create(&self, tracked: &mut Tracked<DomainState>) -> ResourceResult<()> {
        info!(criteria = %tracked.state.criteria, "Creating domain");
        let body = domain_create_request(&tracked.state);
        create_entity::<DomainResponse, T, _>(self.client, tracked, &body)?;
        self.read(tracked)
    }

    fn update(&self, tracked: &mut Tracked<DomainState>) -> ResourceResult<()> {
        let body = domain_update_request(&tracked.state);
        update_entity::<DomainResponse, T, _>(self.client, tracked, &body)?;
        self.read(tracked)
    }

    fn delete(&self, tracked: &mut Tracked<DomainState>) -> ResourceResult<()> {
        delete_entity::<DomainResponse, T, _>(self.client, tracked)
    }

    fn in_sync(&self, tracked: &Tracked<DomainState>) -> ResourceResult<bool> {
        let remote: DomainResponse = fetch_bound(self.client, tracked)?;
        Ok(domain_equivalent(&tracked.state, &remote))
    }
}
