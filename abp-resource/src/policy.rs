use abp_client::{AbpClient, Transport};
use abp_model::PolicyState;
use abp_model::compare::policy_equivalent;
use abp_model::convert::{policy_request, policy_state};
use abp_model::wire::PolicyResponse;
use abp_types::{EntityKind, ResourceId, StructuredId};
use tracing::info;

use crate::error::ResourceResult;
use crate::lifecycle::{
    Lifecycle, create_entity, delete_entity, fetch_bound, read_entity, resolve_ids, update_entity,
};
use crate::tracked::Tracked;

/// Policies and their ordered directives. Create and update share one body.
pub struct PolicyResource<'c, T> {
    client: &'c AbpClient<T>,
}

impl<'c, T: Transport> PolicyResource<'c, T> {
    pub const fn new(client: &'c AbpClient<T>) -> Self {
        Self { client }
    }
}

impl<T: Transport> Lifecycle for PolicyResource<'_, T> {
    type State = PolicyState;

    const KIND: EntityKind = EntityKind::Policy;

    fn resolve(&self, id: &ResourceId) -> ResourceResult<Vec<StructuredId>> {
        resolve_ids::<PolicyResponse, T>(self.client, id)
    }

    fn read(&self, tracked: &mut Tracked<PolicyState>) -> ResourceResult<()> {
        read_entity(self.client, tracked, policy_state)
    }

    fn create(&self, tracked: &mut Tracked<PolicyState>) -> ResourceResult<()> {
        info!(name = %tracked.state.name, "Creating policy");
        let body = policy_request(&tracked.state);
        create_entity::<PolicyResponse, T, _>(self.client, tracked, &body)?;
        self.read(tracked)
    }

    fn update(&self, tracked: &mut Tracked<PolicyState>) -> ResourceResult<()> {
        let body = policy_request(&tracked.state);
        update_entity::<PolicyResponse, T, _>(self.client, tracked, &body)?;
        self.read(tracked)
    }

    fn delete(&self, tracked: &mut Tracked<PolicyState>) -> ResourceResult<()> {
        delete_entity::<PolicyResponse, T, _>(self.client, tracked)
    }

    fn in_sync(&self, tracked: &Tracked<PolicyState>) -> ResourceResult<bool> {
        let remote: PolicyResponse = fetch_bound(self.client, tracked)?;
        Ok(policy_equivalent(&tracked.state, &remote))
    }
}
