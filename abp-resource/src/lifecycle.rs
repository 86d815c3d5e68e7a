//! The per-kind resource state machine.
//!
//! `Unbound -> import | create -> Bound -> read/update ... -> delete`.
//! A failed read unbinds the resource. Nothing is retried.

use abp_client::{AbpClient, Transport};
use abp_model::{AccountScoped, Decoded, RemoteEntity};
use abp_types::{EntityKind, ResourceId, StructuredId};
use std::fmt::Debug;
use tracing::{info, warn};

use crate::error::ResourceResult;
use crate::resolver::{resolve_by_id, resolve_by_name};
use crate::tracked::Tracked;

/// Lifecycle operations for one entity kind.
pub trait Lifecycle {
    type State: Clone + Debug + Default;

    const KIND: EntityKind;

    /// Resolves an import id to the remote ids it denotes, primary first.
    fn resolve(&self, id: &ResourceId) -> ResourceResult<Vec<StructuredId>>;

    /// Refreshes local state from the remote. Unbinds on any failure.
    fn read(&self, tracked: &mut Tracked<Self::State>) -> ResourceResult<()>;

    /// Creates the remote entity, binds its id and reads it back.
    fn create(&self, tracked: &mut Tracked<Self::State>) -> ResourceResult<()>;

    /// Sends the full mutable field set, then reads back.
    fn update(&self, tracked: &mut Tracked<Self::State>) -> ResourceResult<()>;

    fn delete(&self, tracked: &mut Tracked<Self::State>) -> ResourceResult<()>;

    /// Fetches the bound entity and compares it with the declared state.
    fn in_sync(&self, tracked: &Tracked<Self::State>) -> ResourceResult<bool>;

    /// Resolves `id` and reads every resulting resource.
    ///
    /// A name matching several entities yields one resource per match.
    fn import(&self, id: &ResourceId) -> ResourceResult<Vec<Tracked<Self::State>>> {
        info!(kind = %Self::KIND, %id, "Importing resource");
        self.resolve(id)?
            .into_iter()
            .map(|remote_id| {
                let mut tracked = Tracked::bound(remote_id, Self::State::default());
                self.read(&mut tracked)?;
                Ok(tracked)
            })
            .collect()
    }
}

// ── Shared steps ────────────────────────────────────────────────

pub(crate) fn resolve_ids<E, T>(
    client: &AbpClient<T>,
    id: &ResourceId,
) -> ResourceResult<Vec<StructuredId>>
where
    E: AccountScoped,
    T: Transport,
{
    match id {
        ResourceId::Resolved(id) => {
            let entity: E = resolve_by_id(client, id)?;
            Ok(vec![entity.id().clone()])
        }
        ResourceId::Unresolved(name) => {
            let parent_id = client.account_id()?;
            let matches = resolve_by_name::<E, T>(client, name, &parent_id)?;
            Ok(matches
                .into_vec()
                .into_iter()
                .map(|entity| entity.id().clone())
                .collect())
        }
    }
}

pub(crate) fn read_entity<E, T, S>(
    client: &AbpClient<T>,
    tracked: &mut Tracked<S>,
    to_state: impl FnOnce(&E) -> Decoded<S>,
) -> ResourceResult<()>
where
    E: RemoteEntity,
    T: Transport,
{
    let id = tracked.require_id(E::KIND)?;
    match client.fetch::<E>(id.as_str()) {
        Ok(entity) => {
            let decoded = to_state(&entity);
            tracked.state = decoded.value;
            tracked.anomalies = decoded.anomalies;
            Ok(())
        }
        Err(err) => {
            warn!(kind = %E::KIND, %id, error = %err, "Read failed, unbinding resource");
            tracked.unbind();
            Err(err.into())
        }
    }
}

pub(crate) fn create_entity<E, T, S>(
    client: &AbpClient<T>,
    tracked: &mut Tracked<S>,
    body: &E::Create,
) -> ResourceResult<()>
where
    E: AccountScoped,
    T: Transport,
{
    tracked.require_unbound(E::KIND)?;
    let created = client.create::<E>(body)?;
    info!(kind = %E::KIND, id = %created.id(), "Created resource");
    tracked.bind(created.id().clone());
    Ok(())
}

pub(crate) fn update_entity<E, T, S>(
    client: &AbpClient<T>,
    tracked: &Tracked<S>,
    body: &E::Update,
) -> ResourceResult<()>
where
    E: AccountScoped,
    T: Transport,
{
    let id = tracked.require_id(E::KIND)?;
    client.update::<E>(id.as_str(), body)?;
    Ok(())
}

pub(crate) fn delete_entity<E, T, S>(
    client: &AbpClient<T>,
    tracked: &mut Tracked<S>,
) -> ResourceResult<()>
where
    E: AccountScoped,
    T: Transport,
{
    let id = tracked.require_id(E::KIND)?;
    client.delete::<E>(id.as_str())?;
    tracked.unbind();
    Ok(())
}

pub(crate) fn fetch_bound<E, T, S>(
    client: &AbpClient<T>,
    tracked: &Tracked<S>,
) -> ResourceResult<E>
where
    E: RemoteEntity,
    T: Transport,
{
    let id = tracked.require_id(E::KIND)?;
    Ok(client.fetch::<E>(id.as_str())?)
}
