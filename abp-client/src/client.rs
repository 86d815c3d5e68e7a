//! Typed requests against the bot-management API.

use crate::config::ClientConfig;
use crate::error::{Action, ClientError, ClientResult, Operation};
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport, TransportError};
use abp_model::wire::{AccountResponse, ListEnvelope, RootResponse};
use abp_model::{AccountScoped, RemoteEntity};
use abp_types::EntityKind;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Root of the API; `GET` returns the caller's account id.
pub const ROOT_PATH: &str = "/botmanagement/v1/";
/// Parent path of every account-scoped listing and creation.
pub const ACCOUNT_PATH: &str = "/botmanagement/v1/account";

const OK: u16 = 200;
const CREATED: u16 = 201;
const NOT_FOUND: u16 = 404;

fn entity_path(kind: EntityKind, id: &str) -> String {
    format!("{ROOT_PATH}{}/{id}", kind.path_segment())
}

fn collection_path(kind: EntityKind, account_id: &str) -> String {
    format!("{ACCOUNT_PATH}/{account_id}/{}", kind.path_segment())
}

fn account_target(account_id: &str) -> String {
    format!("under account {account_id}")
}

/// Repository over the remote API.
///
/// Every call logs the raw response body before checking the status, so any
/// error can carry the body verbatim. Nothing is cached between calls.
pub struct AbpClient<T = HttpTransport> {
    transport: T,
}

impl AbpClient<HttpTransport> {
    /// Creates a client talking HTTP to the configured base URL.
    pub fn from_config(config: &ClientConfig) -> Result<Self, TransportError> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: Transport> AbpClient<T> {
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    pub const fn transport(&self) -> &T {
        &self.transport
    }

    // ── Request plumbing ───────────────────────────────────────────

    fn send(
        &self,
        operation: Operation,
        target: &str,
        request: ApiRequest,
    ) -> ClientResult<ApiResponse> {
        if let Some(body) = &request.body {
            debug!(%operation, %target, %body, "about to send request");
        }
        let response =
            self.transport
                .send(&request)
                .map_err(|source| ClientError::Transport {
                    operation,
                    target: target.to_string(),
                    source,
                })?;
        debug!(
            %operation,
            %target,
            status = response.status,
            body = %response.body,
            "API response"
        );
        Ok(response)
    }

    fn send_expecting(
        &self,
        operation: Operation,
        target: &str,
        request: ApiRequest,
        expected: u16,
    ) -> ClientResult<String> {
        let ApiResponse { status, body } = self.send(operation, target, request)?;
        match status {
            s if s == expected => Ok(body),
            NOT_FOUND if operation.action == Action::Read => Err(ClientError::NotFound {
                operation,
                target: target.to_string(),
                body,
            }),
            status => Err(ClientError::UnexpectedStatus {
                operation,
                target: target.to_string(),
                status,
                body,
            }),
        }
    }

    fn get_json<R: DeserializeOwned>(
        &self,
        operation: Operation,
        target: &str,
        path: String,
    ) -> ClientResult<R> {
        let request = ApiRequest {
            method: Method::Get,
            path,
            body: None,
        };
        let body = self.send_expecting(operation, target, request, OK)?;
        parse(operation, target, body)
    }

    fn write_json<B: Serialize, R: DeserializeOwned>(
        &self,
        operation: Operation,
        target: &str,
        method: Method,
        path: String,
        body: &B,
        expected: u16,
    ) -> ClientResult<R> {
        let body = serde_json::to_string(body)
            .map_err(|source| ClientError::Encode { operation, source })?;
        let request = ApiRequest {
            method,
            path,
            body: Some(body),
        };
        let body = self.send_expecting(operation, target, request, expected)?;
        parse(operation, target, body)
    }

    // ── Account ────────────────────────────────────────────────────

    /// Looks up the caller's own account id via the API root.
    pub fn account_id(&self) -> ClientResult<String> {
        let operation = Operation::new(Action::Discover, EntityKind::Account);
        info!("Getting account ID from API root");
        let root: RootResponse = self.get_json(operation, "root", ROOT_PATH.to_string())?;
        Ok(root.account_id)
    }

    pub fn account(&self, account_id: &str) -> ClientResult<AccountResponse> {
        self.fetch(account_id)
    }

    /// Root lookup followed by a full account fetch. Either hop's failure aborts.
    pub fn account_without_id(&self) -> ClientResult<AccountResponse> {
        let account_id = self.account_id()?;
        self.account(&account_id)
    }

    // ── Generic entity operations ──────────────────────────────────

    /// Fetches one entity by id. A 404 becomes [`ClientError::NotFound`].
    pub fn fetch<E: RemoteEntity>(&self, id: &str) -> ClientResult<E> {
        let operation = Operation::new(Action::Read, E::KIND);
        require_id(operation, id)?;
        info!(kind = %E::KIND, %id, "Getting entity");
        self.get_json(operation, id, entity_path(E::KIND, id))
    }

    /// Lists every entity of a kind under an account, in server order.
    pub fn list<E: AccountScoped>(&self, account_id: &str) -> ClientResult<Vec<E>> {
        let operation = Operation::new(Action::List, E::KIND);
        if account_id.trim().is_empty() {
            return Err(ClientError::InvalidArgument {
                operation,
                reason: "empty account ID".to_string(),
            });
        }
        info!(kind = %E::KIND, %account_id, "Listing entities for account");
        let target = account_target(account_id);
        let envelope: ListEnvelope<E> =
            self.get_json(operation, &target, collection_path(E::KIND, account_id))?;
        Ok(envelope.items)
    }

    /// Lists every entity of a kind under the caller's own account.
    pub fn list_for_caller<E: AccountScoped>(&self) -> ClientResult<Vec<E>> {
        let account_id = self.account_id()?;
        self.list(&account_id)
    }

    /// Creates an entity under the caller's account. Only `201 Created` succeeds.
    pub fn create<E: AccountScoped>(&self, body: &E::Create) -> ClientResult<E> {
        let operation = Operation::new(Action::Create, E::KIND);
        info!(kind = %E::KIND, "Creating entity");
        let account_id = self.account_id()?;
        let target = account_target(&account_id);
        self.write_json(
            operation,
            &target,
            Method::Post,
            collection_path(E::KIND, &account_id),
            body,
            CREATED,
        )
    }

    /// Replaces an entity's mutable fields. Only `200 OK` succeeds.
    pub fn update<E: AccountScoped>(&self, id: &str, body: &E::Update) -> ClientResult<E> {
        let operation = Operation::new(Action::Update, E::KIND);
        require_id(operation, id)?;
        info!(kind = %E::KIND, %id, "Updating entity");
        self.write_json(
            operation,
            id,
            Method::Put,
            entity_path(E::KIND, id),
            body,
            OK,
        )
    }

    /// Deletes an entity. Only `200 OK` succeeds; the body is logged and dropped.
    pub fn delete<E: AccountScoped>(&self, id: &str) -> ClientResult<()> {
        let operation = Operation::new(Action::Delete, E::KIND);
        require_id(operation, id)?;
        info!(kind = %E::KIND, %id, "Deleting entity");
        let request = ApiRequest {
            method: Method::Delete,
            path: entity_path(E::KIND, id),
            body: None,
        };
        self.send_expecting(operation, id, request, OK)?;
        debug!(kind = %E::KIND, %id, "delete was successful");
        Ok(())
    }
}

fn require_id(operation: Operation, id: &str) -> ClientResult<()> {
    if id.trim().is_empty() {
        return Err(ClientError::InvalidArgument {
            operation,
            reason: format!("can't use empty {} ID", operation.kind),
        });
    }
    Ok(())
}

fn parse<R: DeserializeOwned>(operation: Operation, target: &str, body: String) -> ClientResult<R> {
    serde_json::from_str(&body).map_err(|source| ClientError::Decode {
        operation,
        target: target.to_string(),
        source,
        body,
    })
}
