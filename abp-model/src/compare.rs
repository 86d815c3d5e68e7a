//! Structural equivalence between desired state and a fetched remote entity.
//!
//! Optional scalars compare as options: an absent desired value matches only
//! an absent remote value, never an empty string. Lists are compared by length
//! first and then element by element in order; a reordering is a mismatch.
//! Computed fields (`account_id`) and create-only fields are not compared.

use crate::codec::{decode_directives, decode_selectors};
use crate::state::{Directive, DomainState, PolicyState, Selector, SiteState};
use crate::wire::{DirectiveWire, DomainResponse, PolicyResponse, SelectorWire, SiteResponse};
use tracing::debug;

/// Compares desired selectors with remote ones after decoding the remote side.
///
/// A malformed remote selector is dropped by decoding, so it can never match.
#[must_use]
pub fn selectors_equivalent(desired: &[Selector], remote: &[SelectorWire]) -> bool {
    if desired.len() != remote.len() {
        return false;
    }
    decode_selectors(remote).value == desired
}

#[must_use]
pub fn directives_equivalent(desired: &[Directive], remote: &[DirectiveWire]) -> bool {
    if desired.len() != remote.len() {
        return false;
    }
    decode_directives(remote).value == desired
}

#[must_use]
pub fn site_equivalent(desired: &SiteState, remote: &SiteResponse) -> bool {
    debug!(
        desired = ?desired,
        remote = ?remote,
        "comparing site"
    );
    desired.name == remote.name
        && desired.mx_hostname_id == remote.mx_hostname_id
        && selectors_equivalent(&desired.selectors, &remote.selectors)
}

#[must_use]
pub fn policy_equivalent(desired: &PolicyState, remote: &PolicyResponse) -> bool {
    debug!(
        desired = ?desired,
        remote = ?remote,
        "comparing policy"
    );
    desired.name == remote.name
        && desired.description == remote.description
        && directives_equivalent(&desired.directives, &remote.directives)
}

/// Compares the fields an update can change.
#[must_use]
pub fn domain_equivalent(desired: &DomainState, remote: &DomainResponse) -> bool {
    let r = &remote.settings;
    desired.site_id == r.site_id
        && desired.challenge_ip_lookup_mode == r.challenge_ip_lookup_mode
        && desired.analysis_ip_lookup_mode == r.analysis_ip_lookup_mode
        && desired.cookie_scope == r.cookie_scope
        && desired.captcha_settings == r.captcha_settings
        && desired.log_region == r.log_region
        && desired.obfuscate_path == r.obfuscate_path
        && desired.cookie_mode == r.cookie_mode
        && desired.no_js_injection_paths == r.no_js_injection_paths
        && desired.unmasked_headers == r.unmasked_headers
}
