use abp_client::{AbpClient, Transport};
use abp_model::SiteState;
use abp_model::compare::site_equivalent;
use abp_model::convert::{site_create_request, site_state, site_update_request};
use abp_model::wire::SiteResponse;
use abp_types::{EntityKind, ResourceId, StructuredId};
use tracing::info;

use crate::error::ResourceResult;
use crate::lifecycle::{
    Lifecycle, create_entity, delete_entity, fetch_bound, read_entity, resolve_ids, update_entity,
};
use crate::tracked::Tracked;

/// Sites and their selector lists.
pub struct SiteResource<'c, T> {
    client: &'c AbpClient<T>,
}

impl<'c, T: Transport> SiteResource<'c, T> {
    pub const fn new(client: &'c AbpClient<T>) -> Self {
        Self { client }
    }
}

impl<T: Transport> Lifecycle for SiteResource<'_, T> {
    type State = SiteState;

    const KIND: EntityKind = EntityKind::Site;

    fn resolve(&self, id: &ResourceId) -> ResourceResult<Vec<StructuredId>> {
        resolve_ids::<SiteResponse, T>(self.client, id)
    }

    fn read(&self, tracked: &mut Tracked<SiteState>) -> ResourceResult<()> {
        read_entity(self.client, tracked, site_state)
    }

    fn create(&self, tracked: &mut Tracked<SiteState>) -> ResourceResult<()> {
        info!(name = %tracked.state.name, "Creating site");
        let body = site_create_request(&tracked.state);
        create_entity::<SiteResponse, T, _>(self.client, tracked, &body)?;
        self.read(tracked)
    }

    fn update(&self, tracked: &mut Tracked<SiteState>) -> ResourceResult<()> {
        let body = site_update_request(&tracked.state);
        update_entity::<SiteResponse, T, _>(self.client, tracked, &body)?;
        self.read(tracked)
    }

    fn delete(&self, tracked: &mut Tracked<SiteState>) -> ResourceResult<()> {
        delete_entity::<SiteResponse, T, _>(self.client, tracked)
    }

    fn in_sync(&self, tracked: &Tracked<SiteState>) -> ResourceResult<bool> {
        let remote: SiteResponse = fetch_bound(self.client, tracked)?;
        Ok(site_equivalent(&tracked.state, &remote))
    }
}
