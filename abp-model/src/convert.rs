//! Builders between local state and wire bodies.
//!
//! Create and update bodies are built by separate functions; each always
//! carries the complete set of fields its operation accepts.

use crate::Decoded;
use crate::codec::{decode_directives, decode_selectors, encode_directives, encode_selectors};
use crate::state::{AccountState, DomainState, PolicyState, SiteState};
use crate::wire::{
    AccountResponse, CreateDomain, CreateSite, DomainResponse, DomainSettings, PolicyRequest,
    PolicyResponse, SiteResponse, UpdateDomain, UpdateSite,
};

// ── Site ────────────────────────────────────────────────────────

#[must_use]
pub fn site_create_request(state: &SiteState) -> CreateSite {
    CreateSite {
        name: state.name.clone(),
        selectors: encode_selectors(&state.selectors),
        mx_hostname_id: state.mx_hostname_id.clone(),
    }
}

/// `mx_hostname_id` cannot change after creation and is not part of the update body.
#[must_use]
pub fn site_update_request(state: &SiteState) -> UpdateSite {
    UpdateSite {
        name: state.name.clone(),
        selectors: encode_selectors(&state.selectors),
    }
}

#[must_use]
pub fn site_state(response: &SiteResponse) -> Decoded<SiteState> {
    decode_selectors(&response.selectors).map(|selectors| SiteState {
        account_id: Some(response.account_id.clone()),
        name: response.name.clone(),
        mx_hostname_id: response.mx_hostname_id.clone(),
        selectors,
    })
}

// ── Policy ──────────────────────────────────────────────────────

#[must_use]
pub fn policy_request(state: &PolicyState) -> PolicyRequest {
    PolicyRequest {
        name: state.name.clone(),
        description: state.description.clone(),
        directives: encode_directives(&state.directives),
    }
}

#[must_use]
pub fn policy_state(response: &PolicyResponse) -> Decoded<PolicyState> {
    decode_directives(&response.directives).map(|directives| PolicyState {
        account_id: Some(response.account_id.clone()),
        name: response.name.clone(),
        description: response.description.clone(),
        directives,
    })
}

// ── Domain ──────────────────────────────────────────────────────

fn domain_settings(state: &DomainState) -> DomainSettings {
    DomainSettings {
        site_id: state.site_id.clone(),
        challenge_ip_lookup_mode: state.challenge_ip_lookup_mode.clone(),
        analysis_ip_lookup_mode: state.analysis_ip_lookup_mode.clone(),
        cookie_scope: state.cookie_scope.clone(),
        captcha_settings: state.captcha_settings.clone(),
        log_region: state.log_region.clone(),
        no_js_injection_paths: state.no_js_injection_paths.clone(),
        obfuscate_path: state.obfuscate_path.clone(),
        cookie_mode: state.cookie_mode.clone(),
        unmasked_headers: state.unmasked_headers.clone(),
    }
}

#[must_use]
pub fn domain_create_request(state: &DomainState) -> CreateDomain {
    CreateDomain {
        settings: domain_settings(state),
        criteria: state.criteria.clone(),
        encryption_key_id: state.encryption_key_id.clone(),
    }
}

#[must_use]
pub fn domain_update_request(state: &DomainState) -> UpdateDomain {
    domain_settings(state)
}

#[must_use]
pub fn domain_state(response: &DomainResponse) -> DomainState {
    let s = &response.settings;
    DomainState {
        account_id: Some(response.account_id.clone()),
        site_id: s.site_id.clone(),
        challenge_ip_lookup_mode: s.challenge_ip_lookup_mode.clone(),
        analysis_ip_lookup_mode: s.analysis_ip_lookup_mode.clone(),
        criteria: response.criteria.clone(),
        cookie_scope: s.cookie_scope.clone(),
        captcha_settings: s.captcha_settings.clone(),
        log_region: s.log_region.clone(),
        obfuscate_path: s.obfuscate_path.clone(),
        mobile_api_obfuscate_path: response.mobile_api_obfuscate_path.clone(),
        cookie_mode: s.cookie_mode.clone(),
        no_js_injection_paths: s.no_js_injection_paths.clone(),
        unmasked_headers: s.unmasked_headers.clone(),
        encryption_key_id: response.encryption_key_id.clone(),
    }
}

// ── Account ─────────────────────────────────────────────────────

#[must_use]
pub fn account_state(response: &AccountResponse) -> AccountState {
    AccountState {
        name: response.name.clone(),
        my_account_id: response.my_account_id.clone(),
    }
}
