mod common;

use abp_client::Method;
use abp_model::Criteria;
use abp_model::wire::SiteResponse;
use abp_resource::{
    AccountResource, DomainResource, Lifecycle, PolicyResource, ResourceError, SiteResource,
    partition_by_name,
};
use abp_types::{EntityKind, ResourceId, StructuredId};
use common::{ACCOUNT_ID, StubRemote};
use pretty_assertions::assert_eq;
use serde_json::json;

fn site(name: &str) -> serde_json::Value {
    json!({ "name": name, "selectors": [] })
}

fn site_response(id: &str, name: &str) -> SiteResponse {
    serde_json::from_value(json!({ "id": id, "name": name })).unwrap()
}

// ── Name matching fold ──────────────────────────────────────────

#[test]
fn partition_keeps_listing_order() {
    let a = "aaaaaaaa-0000-0000-0000-000000000001";
    let b = "bbbbbbbb-0000-0000-0000-000000000002";
    let c = "cccccccc-0000-0000-0000-000000000003";
    let listing = vec![
        site_response(a, "x"),
        site_response(b, "y"),
        site_response(c, "x"),
    ];

    let matches = partition_by_name(listing, "x").unwrap();

    assert_eq!(matches.primary.id.as_str(), a);
    assert_eq!(matches.extras.len(), 1);
    assert_eq!(matches.extras[0].id.as_str(), c);
    assert_eq!(matches.count(), 2);
}

#[test]
fn partition_is_case_sensitive() {
    let listing = vec![site_response("a-b-c-d-e", "Shop")];
    assert!(partition_by_name(listing, "shop").is_none());
}

#[test]
fn partition_of_nothing_is_none() {
    assert!(partition_by_name(Vec::<SiteResponse>::new(), "x").is_none());
}

// ── Import by name ──────────────────────────────────────────────

#[test]
fn ambiguous_name_fans_out() {
    let remote = StubRemote::new();
    let first = remote.seed(EntityKind::Site, site("x"));
    remote.seed(EntityKind::Site, site("y"));
    let second = remote.seed(EntityKind::Site, site("x"));
    let client = remote.client();

    let imported = SiteResource::new(&client)
        .import(&ResourceId::classify("x"))
        .unwrap();

    assert_eq!(imported.len(), 2);
    let ids: Vec<&str> = imported
        .iter()
        .map(|t| t.id().unwrap().as_str())
        .collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
    assert!(imported.iter().all(|t| t.state.name == "x"));
}

#[test]
fn name_import_lists_caller_account() {
    let remote = StubRemote::new();
    remote.seed(EntityKind::Policy, json!({ "name": "p", "directives": [] }));
    let client = remote.client();

    PolicyResource::new(&client)
        .import(&ResourceId::classify("p"))
        .unwrap();

    let requests = remote.requests();
    assert_eq!(requests[0].path, "/botmanagement/v1/");
    assert_eq!(
        requests[1].path,
        format!("/botmanagement/v1/account/{ACCOUNT_ID}/policy")
    );
}

#[test]
fn missing_name_is_not_found() {
    let remote = StubRemote::new();
    remote.seed(EntityKind::Site, site("x"));
    let client = remote.client();

    let err = SiteResource::new(&client)
        .import(&ResourceId::classify("z"))
        .unwrap_err();

    assert!(matches!(
        err,
        ResourceError::NameNotFound { kind: EntityKind::Site, ref name } if name == "z"
    ));
    // Listing only; nothing fetched by id.
    assert_eq!(remote.count(Method::Get), 2);
}

#[test]
fn domain_name_import_is_rejected_without_io() {
    let remote = StubRemote::new();
    let client = remote.client();

    let err = DomainResource::new(&client)
        .import(&ResourceId::classify("example.com"))
        .unwrap_err();

    assert!(matches!(err, ResourceError::NameImportUnsupported { .. }));
    assert!(remote.requests().is_empty());
}

// ── Import by ID ────────────────────────────────────────────────

#[test]
fn structured_id_is_fetched_directly() {
    let remote = StubRemote::new();
    let id = remote.seed(
        EntityKind::Site,
        json!({
            "name": "shop",
            "selectors": [{
                "criteria": { "path_prefix": "/a" },
                "analysis_settings": { "rate_limiting": "100" }
            }]
        }),
    );
    let client = remote.client();

    let imported = SiteResource::new(&client)
        .import(&ResourceId::classify(&id))
        .unwrap();

    assert_eq!(imported.len(), 1);
    assert_eq!(imported[0].id().map(StructuredId::as_str), Some(id.as_str()));
    assert_eq!(
        imported[0].state.selectors[0].criteria,
        Criteria::PathPrefix("/a".into())
    );
    assert!(
        remote
            .requests()
            .iter()
            .all(|r| r.path == format!("/botmanagement/v1/site/{id}"))
    );
}

#[test]
fn missing_id_is_import_not_found_with_cause() {
    let remote = StubRemote::new();
    let client = remote.client();
    let id = "00000000-0000-0000-0000-000000000000";

    let err = SiteResource::new(&client)
        .import(&ResourceId::classify(id))
        .unwrap_err();

    match &err {
        ResourceError::ImportNotFound { kind, id: got, .. } => {
            assert_eq!(*kind, EntityKind::Site);
            assert_eq!(got.as_str(), id);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.client_error().unwrap().is_not_found());
    assert_eq!(remote.requests().len(), 1);
}

#[test]
fn server_error_on_id_import_still_reads_as_not_found() {
    let remote = StubRemote::new();
    remote.respond_next(500, "internal");
    let client = remote.client();

    let err = PolicyResource::new(&client)
        .import(&ResourceId::classify("a-b-c-d-e"))
        .unwrap_err();

    assert!(matches!(err, ResourceError::ImportNotFound { .. }));
    assert_eq!(err.client_error().and_then(|e| e.status()), Some(500));
}

#[test]
fn four_segments_is_a_name() {
    let remote = StubRemote::new();
    let client = remote.client();

    let err = SiteResource::new(&client)
        .import(&ResourceId::classify("a-b-c-d"))
        .unwrap_err();

    assert!(matches!(err, ResourceError::NameNotFound { .. }));
    assert!(
        remote
            .requests()
            .iter()
            .all(|r| !r.path.ends_with("/site/a-b-c-d"))
    );
}

// ── Account ─────────────────────────────────────────────────────

#[test]
fn account_import_requires_structured_id() {
    let remote = StubRemote::new();
    let client = remote.client();

    let err = AccountResource::new(&client)
        .import(&ResourceId::classify("my-account"))
        .unwrap_err();

    assert!(matches!(err, ResourceError::InvalidImportId { kind: EntityKind::Account, .. }));
    assert!(remote.requests().is_empty());
}

#[test]
fn account_import_by_id() {
    let remote = StubRemote::new();
    let client = remote.client();

    let imported = AccountResource::new(&client)
        .import(&ResourceId::classify(ACCOUNT_ID))
        .unwrap();

    assert_eq!(imported.len(), 1);
    assert_eq!(imported[0].state.name, "Stub Account");
    assert_eq!(imported[0].state.my_account_id, "1001");
}
