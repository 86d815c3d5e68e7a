//! Drift detection and convergence.

use abp_client::{AbpClient, Transport};
use abp_model::compare::{policy_equivalent, site_equivalent};
use abp_model::wire::{PolicyResponse, SiteResponse};
use abp_model::{PolicyState, SiteState};
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

use crate::error::{ResourceError, ResourceResult};
use crate::lifecycle::Lifecycle;
use crate::tracked::Tracked;

/// What `apply` would do to converge a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Plan {
    /// Unbound, or the bound entity no longer exists remotely.
    Create,
    NoChange,
    /// Bound and reachable but drifted from the declared state.
    Update,
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "create",
            Self::NoChange => "no change",
            Self::Update => "update",
        })
    }
}

pub fn plan<L: Lifecycle>(lifecycle: &L, tracked: &Tracked<L::State>) -> ResourceResult<Plan> {
    if !tracked.is_bound() {
        return Ok(Plan::Create);
    }
    let plan = match lifecycle.in_sync(tracked) {
        Ok(true) => Plan::NoChange,
        Ok(false) => Plan::Update,
        Err(ResourceError::Client(err)) if err.is_not_found() => Plan::Create,
        Err(err) => return Err(err),
    };
    debug!(kind = %L::KIND, id = ?tracked.id(), %plan, "planned");
    Ok(plan)
}

/// Plans, then performs the step. Returns what was done.
pub fn apply<L: Lifecycle>(lifecycle: &L, tracked: &mut Tracked<L::State>) -> ResourceResult<Plan> {
    let plan = plan(lifecycle, tracked)?;
    info!(kind = %L::KIND, id = ?tracked.id(), %plan, "Applying");
    match plan {
        Plan::Create => {
            if let Some(stale) = tracked.unbind() {
                info!(kind = %L::KIND, id = %stale, "Remote entity is gone, recreating");
            }
            lifecycle.create(tracked)?;
        }
        Plan::Update => lifecycle.update(tracked)?,
        Plan::NoChange => {}
    }
    Ok(plan)
}

/// The first of the caller's sites equivalent to `desired`, in listing order.
pub fn find_site_matching<T: Transport>(
    client: &AbpClient<T>,
    desired: &SiteState,
) -> ResourceResult<Option<SiteResponse>> {
    let sites: Vec<SiteResponse> = client.list_for_caller()?;
    Ok(sites.into_iter().find(|site| site_equivalent(desired, site)))
}

pub fn find_policy_matching<T: Transport>(
    client: &AbpClient<T>,
    desired: &PolicyState,
) -> ResourceResult<Option<PolicyResponse>> {
    let policies: Vec<PolicyResponse> = client.list_for_caller()?;
    Ok(policies.into_iter().find(|policy| policy_equivalent(desired, policy)))
}
