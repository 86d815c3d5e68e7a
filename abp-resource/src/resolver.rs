//! Identity resolution for import.
//!
//! An import id is classified once into [`ResourceId`]. A structured id is
//! fetched directly; anything else is a name, matched exactly against a
//! listing of the parent account. The first match in listing order is the
//! primary; every other match fans out into a resource of its own.

use abp_client::{AbpClient, Transport};
use abp_model::{AccountScoped, RemoteEntity};
use abp_types::StructuredId;
use tracing::{debug, info};

use crate::error::{ResourceError, ResourceResult};

/// Entities sharing one name, split by listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMatches<E> {
    pub primary: E,
    pub extras: Vec<E>,
}

impl<E> NameMatches<E> {
    /// Primary first, then extras in listing order.
    pub fn into_vec(self) -> Vec<E> {
        let mut all = Vec::with_capacity(1 + self.extras.len());
        all.push(self.primary);
        all.extend(self.extras);
        all
    }

    #[must_use]
    pub fn count(&self) -> usize {
        1 + self.extras.len()
    }
}

/// Splits entities named exactly `name` into a primary and extras.
///
/// Matching is case-sensitive. Returns `None` when nothing matches.
pub fn partition_by_name<E: RemoteEntity>(
    entities: impl IntoIterator<Item = E>,
    name: &str,
) -> Option<NameMatches<E>> {
    entities
        .into_iter()
        .filter(|entity| entity.name() == Some(name))
        .fold(None, |acc, entity| match acc {
            None => Some(NameMatches {
                primary: entity,
                extras: Vec::new(),
            }),
            Some(mut matches) => {
                matches.extras.push(entity);
                Some(matches)
            }
        })
}

/// Lists `parent_id`'s entities and keeps those named `name`.
pub fn resolve_by_name<E, T>(
    client: &AbpClient<T>,
    name: &str,
    parent_id: &str,
) -> ResourceResult<NameMatches<E>>
where
    E: AccountScoped,
    T: Transport,
{
    info!(kind = %E::KIND, %name, %parent_id, "Resolving import by name");
    let entities = client.list::<E>(parent_id)?;
    let total = entities.len();
    let matches = partition_by_name(entities, name).ok_or_else(|| ResourceError::NameNotFound {
        kind: E::KIND,
        name: name.to_string(),
    })?;
    debug!(kind = %E::KIND, %name, total, matched = matches.count(), "name matches");
    Ok(matches)
}

/// Fetches `id` directly. Every failure surfaces as [`ResourceError::ImportNotFound`].
pub fn resolve_by_id<E, T>(client: &AbpClient<T>, id: &StructuredId) -> ResourceResult<E>
where
    E: RemoteEntity,
    T: Transport,
{
    info!(kind = %E::KIND, %id, "Resolving import by ID");
    client
        .fetch::<E>(id.as_str())
        .map_err(|source| ResourceError::ImportNotFound {
            kind: E::KIND,
            id: id.clone(),
            source,
        })
}
