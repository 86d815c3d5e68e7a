use abp_cli::{Cli, Command, load_config, run};
use abp_client::{AbpClient, ApiRequest, ApiResponse, Method, Transport, TransportError};
use abp_types::EntityKind;
use clap::Parser;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::fs;
use std::sync::Mutex;

const ACCOUNT: &str = "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee";
const SITE: &str = "11111111-2222-3333-4444-555555555555";

/// Answers by exact method and path; anything else is a 404.
#[derive(Default)]
struct Canned {
    routes: Vec<(Method, String, u16, Value)>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl Canned {
    fn on(mut self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.routes.push((method, path.to_string(), status, body));
        self
    }

    fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for Canned {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        let found = self
            .routes
            .iter()
            .find(|(method, path, _, _)| *method == request.method && *path == request.path);
        Ok(match found {
            Some((_, _, status, body)) => ApiResponse {
                status: *status,
                body: body.to_string(),
            },
            None => ApiResponse {
                status: 404,
                body: "{}".to_string(),
            },
        })
    }
}

fn with_account(canned: Canned) -> Canned {
    canned
        .on(Method::Get, "/botmanagement/v1/", 200, json!({ "account_id": ACCOUNT }))
        .on(
            Method::Get,
            &format!("/botmanagement/v1/account/{ACCOUNT}"),
            200,
            json!({ "id": ACCOUNT, "name": "Acme", "my_account_id": "7" }),
        )
}

fn site_body(name: &str) -> Value {
    json!({
        "id": SITE,
        "account_id": ACCOUNT,
        "name": name,
        "selectors": [
            { "criteria": { "path_prefix": "/a" }, "analysis_settings": { "rate_limiting": "100" } }
        ]
    })
}

fn run_to_json(transport: &Canned, command: &Command) -> Value {
    let client = AbpClient::new(transport);
    let mut out = Vec::new();
    run(&client, command, &mut out).unwrap();
    serde_json::from_slice(&out).unwrap()
}

// ── Arguments and configuration ─────────────────────────────────

#[test]
fn parses_import_command() {
    let cli = Cli::try_parse_from([
        "abpctl", "--api-id", "1", "--api-key", "k", "import", "site", "My Site",
    ])
    .unwrap();

    assert_eq!(
        cli.command,
        Command::Import {
            kind: EntityKind::Site,
            id: "My Site".to_string(),
        }
    );
}

#[test]
fn rejects_unknown_kind() {
    assert!(Cli::try_parse_from(["abpctl", "get", "gateway", SITE]).is_err());
}

#[test]
fn flags_override_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("abp.json");
    fs::write(
        &path,
        r#"{ "base_url": "https://eu.example.test/", "api_id": "file-id", "api_key": "file-key" }"#,
    )
    .unwrap();

    let cli = Cli::try_parse_from([
        "abpctl",
        "--config",
        path.to_str().unwrap(),
        "--api-key",
        "flag-key",
        "--timeout",
        "5",
        "account",
    ])
    .unwrap();
    let config = load_config(&cli).unwrap();

    assert_eq!(config.base_url(), "https://eu.example.test");
    assert_eq!(config.api_id, "file-id");
    assert_eq!(config.api_key, "flag-key");
    assert_eq!(config.timeout_secs, 5);
}

#[test]
fn missing_credentials_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("abp.json");
    fs::write(&path, r#"{ "api_id": "only-id" }"#).unwrap();
    let cli =
        Cli::try_parse_from(["abpctl", "--config", path.to_str().unwrap(), "account"]).unwrap();

    let err = load_config(&cli).unwrap_err();

    assert!(err.to_string().contains("missing API credentials"));
}

#[test]
fn unreadable_config_names_the_file() {
    let cli =
        Cli::try_parse_from(["abpctl", "--config", "/nonexistent/abp.json", "account"]).unwrap();
    let err = load_config(&cli).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/abp.json"));
}

// ── Commands ────────────────────────────────────────────────────

#[test]
fn account_prints_caller_account() {
    let transport = with_account(Canned::default());

    let printed = run_to_json(&transport, &Command::Account);

    assert_eq!(
        printed,
        json!({ "id": ACCOUNT, "name": "Acme", "my_account_id": "7" })
    );
}

#[test]
fn get_prints_state_with_id() {
    let transport = Canned::default().on(
        Method::Get,
        &format!("/botmanagement/v1/site/{SITE}"),
        200,
        site_body("shop"),
    );

    let printed = run_to_json(
        &transport,
        &Command::Get {
            kind: EntityKind::Site,
            id: SITE.to_string(),
        },
    );

    assert_eq!(printed["id"], SITE);
    assert_eq!(printed["name"], "shop");
    assert_eq!(
        printed["selectors"][0]["criteria"],
        json!({ "type": "path_prefix", "value": "/a" })
    );
}

#[test]
fn get_rejects_unstructured_id_without_io() {
    let transport = Canned::default();
    let client = AbpClient::new(&transport);
    let command = Command::Get {
        kind: EntityKind::Policy,
        id: "not-an-id".to_string(),
    };

    let err = run(&client, &command, &mut Vec::new()).unwrap_err();

    assert!(err.to_string().contains("invalid policy ID"));
    assert!(transport.requests().is_empty());
}

#[test]
fn import_by_name_prints_every_match() {
    let other = "99999999-2222-3333-4444-555555555555";
    let mut second = site_body("shop");
    second["id"] = json!(other);
    let transport = with_account(Canned::default())
        .on(
            Method::Get,
            &format!("/botmanagement/v1/account/{ACCOUNT}/site"),
            200,
            json!({ "items": [site_body("shop"), second.clone()] }),
        )
        .on(
            Method::Get,
            &format!("/botmanagement/v1/site/{SITE}"),
            200,
            site_body("shop"),
        )
        .on(Method::Get, &format!("/botmanagement/v1/site/{other}"), 200, second);

    let printed = run_to_json(
        &transport,
        &Command::Import {
            kind: EntityKind::Site,
            id: "shop".to_string(),
        },
    );

    let ids: Vec<&str> = printed
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![SITE, other]);
}

#[test]
fn apply_unchanged_resource_is_no_change() {
    let transport = Canned::default().on(
        Method::Get,
        &format!("/botmanagement/v1/site/{SITE}"),
        200,
        site_body("shop"),
    );
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("site.json");
    fs::write(
        &file,
        json!({
            "id": SITE,
            "name": "shop",
            "selectors": [{
                "criteria": { "type": "path_prefix", "value": "/a" },
                "analysis_rate_limiting": "100"
            }]
        })
        .to_string(),
    )
    .unwrap();

    let printed = run_to_json(
        &transport,
        &Command::Apply {
            kind: EntityKind::Site,
            file: file.clone(),
            save: false,
        },
    );

    assert_eq!(printed["applied"], "no_change");
    assert!(transport.requests().iter().all(|r| r.method == Method::Get));
}

#[test]
fn apply_save_writes_bound_id() {
    let transport = with_account(Canned::default())
        .on(
            Method::Post,
            &format!("/botmanagement/v1/account/{ACCOUNT}/site"),
            201,
            site_body("shop"),
        )
        .on(
            Method::Get,
            &format!("/botmanagement/v1/site/{SITE}"),
            200,
            site_body("shop"),
        );
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("site.json");
    fs::write(&file, r#"{ "name": "shop", "selectors": [] }"#).unwrap();

    let printed = run_to_json(
        &transport,
        &Command::Apply {
            kind: EntityKind::Site,
            file: file.clone(),
            save: true,
        },
    );

    assert_eq!(printed["applied"], "create");
    let saved: Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(saved["id"], SITE);
    assert_eq!(saved["account_id"], ACCOUNT);
}

#[test]
fn plan_reports_drift() {
    let transport = Canned::default().on(
        Method::Get,
        &format!("/botmanagement/v1/site/{SITE}"),
        200,
        site_body("renamed-in-console"),
    );
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("site.json");
    fs::write(&file, json!({ "id": SITE, "name": "shop" }).to_string()).unwrap();

    let printed = run_to_json(
        &transport,
        &Command::Plan {
            kind: EntityKind::Site,
            file,
        },
    );

    assert_eq!(printed, json!({ "plan": "update" }));
}

#[test]
fn delete_account_touches_nothing() {
    let transport = Canned::default();

    let printed = run_to_json(
        &transport,
        &Command::Delete {
            kind: EntityKind::Account,
            id: ACCOUNT.to_string(),
        },
    );

    assert_eq!(printed, json!({ "deleted": ACCOUNT }));
    assert!(transport.requests().is_empty());
}

#[test]
fn delete_site_failure_carries_status() {
    let transport = Canned::default().on(
        Method::Delete,
        &format!("/botmanagement/v1/site/{SITE}"),
        500,
        json!({ "errors": ["boom"] }),
    );
    let client = AbpClient::new(&transport);
    let command = Command::Delete {
        kind: EntityKind::Site,
        id: SITE.to_string(),
    };

    let err = run(&client, &command, &mut Vec::new()).unwrap_err();

    let chain = format!("{err:#}");
    assert!(chain.contains("failed to delete site"));
    assert!(chain.contains("500"));
    assert_eq!(transport.requests().len(), 1);
}
