//! In-memory stand-in for the bot-management API.
//!
//! Creates assign a fresh uuid and the caller's account id and echo the
//! submitted body back; updates merge the body into the stored entity.

#![allow(dead_code)]

use abp_client::{AbpClient, ApiRequest, ApiResponse, Method, Transport, TransportError};
use abp_types::EntityKind;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;
use uuid::Uuid;

pub const ACCOUNT_ID: &str = "acc00000-1111-2222-3333-444444444444";
const PREFIX: &str = "/botmanagement/v1/";

#[derive(Default)]
struct Inner {
    /// `(path segment, entity)` in insertion order.
    entities: Vec<(String, Value)>,
    requests: Vec<ApiRequest>,
    overrides: VecDeque<ApiResponse>,
}

#[derive(Default)]
pub struct StubRemote {
    inner: Mutex<Inner>,
}

impl StubRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(&self) -> AbpClient<&Self> {
        AbpClient::new(self)
    }

    /// Stores an entity as if it already existed remotely and returns its id.
    pub fn seed(&self, kind: EntityKind, mut body: Value) -> String {
        let id = body["id"]
            .as_str()
            .map_or_else(|| Uuid::new_v4().to_string(), str::to_string);
        body["id"] = json!(id);
        body["account_id"] = json!(ACCOUNT_ID);
        let mut inner = self.inner.lock().unwrap();
        inner.entities.push((kind.path_segment().to_string(), body));
        id
    }

    /// Answers the next request with `status` and `body` instead of the store.
    pub fn respond_next(&self, status: u16, body: &str) {
        self.inner.lock().unwrap().overrides.push_back(ApiResponse {
            status,
            body: body.to_string(),
        });
    }

    /// Removes an entity behind the client's back.
    pub fn forget(&self, id: &str) {
        self.inner
            .lock()
            .unwrap()
            .entities
            .retain(|(_, entity)| entity["id"] != id);
    }

    /// Edits a stored entity behind the client's back.
    pub fn tamper(&self, id: &str, edit: impl FnOnce(&mut Value)) {
        let mut inner = self.inner.lock().unwrap();
        if let Some((_, entity)) = inner.entities.iter_mut().find(|(_, e)| e["id"] == id) {
            edit(entity);
        }
    }

    pub fn stored(&self, id: &str) -> Option<Value> {
        self.inner
            .lock()
            .unwrap()
            .entities
            .iter()
            .find(|(_, e)| e["id"] == id)
            .map(|(_, e)| e.clone())
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn count(&self, method: Method) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method)
            .count()
    }

    pub fn clear_requests(&self) {
        self.inner.lock().unwrap().requests.clear();
    }
}

fn reply(status: u16, body: Value) -> ApiResponse {
    ApiResponse {
        status,
        body: body.to_string(),
    }
}

fn not_found() -> ApiResponse {
    reply(404, json!({ "errors": [{ "status": 404, "title": "Not Found" }] }))
}

impl Inner {
    fn position(&self, kind: &str, id: &str) -> Option<usize> {
        self.entities
            .iter()
            .position(|(k, e)| k == kind && e["id"] == id)
    }

    fn route(&mut self, request: &ApiRequest) -> ApiResponse {
        let Some(rest) = request.path.strip_prefix(PREFIX) else {
            return not_found();
        };
        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        let body: Value = request
            .body
            .as_deref()
            .map(|b| serde_json::from_str(b).unwrap())
            .unwrap_or(Value::Null);

        match (request.method, segments.as_slice()) {
            (Method::Get, []) => reply(200, json!({ "account_id": ACCOUNT_ID })),
            (Method::Get, ["account", id]) if *id == ACCOUNT_ID => reply(
                200,
                json!({ "id": ACCOUNT_ID, "name": "Stub Account", "my_account_id": "1001" }),
            ),
            (Method::Get, ["account", account, kind]) if *account == ACCOUNT_ID => {
                let items: Vec<Value> = self
                    .entities
                    .iter()
                    .filter(|(k, _)| k == kind)
                    .map(|(_, e)| e.clone())
                    .collect();
                reply(200, json!({ "items": items }))
            }
            (Method::Post, ["account", account, kind]) if *account == ACCOUNT_ID => {
                let mut entity = body;
                entity["id"] = json!(Uuid::new_v4().to_string());
                entity["account_id"] = json!(ACCOUNT_ID);
                self.entities.push(((*kind).to_string(), entity.clone()));
                reply(201, entity)
            }
            (Method::Get, [kind, id]) => match self.position(kind, id) {
                Some(i) => reply(200, self.entities[i].1.clone()),
                None => not_found(),
            },
            (Method::Put, [kind, id]) => match self.position(kind, id) {
                Some(i) => {
                    let stored = &mut self.entities[i].1;
                    if let (Some(target), Value::Object(fields)) = (stored.as_object_mut(), body) {
                        target.extend(fields);
                    }
                    reply(200, stored.clone())
                }
                None => not_found(),
            },
            (Method::Delete, [kind, id]) => match self.position(kind, id) {
                Some(i) => {
                    self.entities.remove(i);
                    reply(200, json!({}))
                }
                None => not_found(),
            },
            _ => not_found(),
        }
    }
}

impl Transport for StubRemote {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(request.clone());
        if let Some(response) = inner.overrides.pop_front() {
            return Ok(response);
        }
        Ok(inner.route(request))
    }
}
