use abp_client::{AbpClient, Transport};
use abp_model::convert::account_state;
use abp_model::wire::AccountResponse;
use abp_model::{AccountState, Decoded};
use abp_types::{EntityKind, ResourceId, StructuredId};
use tracing::info;

use crate::error::{ResourceError, ResourceResult};
use crate::lifecycle::{Lifecycle, fetch_bound, read_entity};
use crate::resolver::resolve_by_id;
use crate::tracked::Tracked;

/// The caller's own account.
///
/// The API cannot create, update or delete accounts. "Create" binds to the
/// account the credentials belong to; update and delete only log and never
/// touch the remote.
pub struct AccountResource<'c, T> {
    client: &'c AbpClient<T>,
}

impl<'c, T: Transport> AccountResource<'c, T> {
    pub const fn new(client: &'c AbpClient<T>) -> Self {
        Self { client }
    }
}

impl<T: Transport> Lifecycle for AccountResource<'_, T> {
    type State = AccountState;

    const KIND: EntityKind = EntityKind::Account;

    fn resolve(&self, id: &ResourceId) -> ResourceResult<Vec<StructuredId>> {
        match id {
            ResourceId::Resolved(id) => {
                let account: AccountResponse = resolve_by_id(self.client, id)?;
                Ok(vec![account.id])
            }
            ResourceId::Unresolved(raw) => Err(ResourceError::InvalidImportId {
                kind: Self::KIND,
                id: raw.clone(),
            }),
        }
    }

    fn read(&self, tracked: &mut Tracked<AccountState>) -> ResourceResult<()> {
        read_entity(self.client, tracked, |remote: &AccountResponse| {
            Decoded::clean(account_state(remote))
        })
    }

    fn create(&self, tracked: &mut Tracked<AccountState>) -> ResourceResult<()> {
        tracked.require_unbound(Self::KIND)?;
        let account = self.client.account_without_id()?;
        info!(id = %account.id, name = %account.name, "Bound to caller's account");
        tracked.state = account_state(&account);
        tracked.anomalies.clear();
        tracked.bind(account.id);
        Ok(())
    }

    fn update(&self, tracked: &mut Tracked<AccountState>) -> ResourceResult<()> {
        info!(id = ?tracked.id(), "Accounts cannot be updated; nothing to do");
        Ok(())
    }

    fn delete(&self, tracked: &mut Tracked<AccountState>) -> ResourceResult<()> {
        info!("Accounts cannot be deleted; removing from local state only");
        tracked.unbind();
        Ok(())
    }

    /// Nothing about an account is declared, so a reachable account is in sync.
    fn in_sync(&self, tracked: &Tracked<AccountState>) -> ResourceResult<bool> {
        fetch_bound::<AccountResponse, T, _>(self.client, tracked)?;
        Ok(true)
    }
}
