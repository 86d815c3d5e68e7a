//! The "send a request, get status and body" seam.

use crate::config::ClientConfig;
use reqwest::blocking::Client;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => Self::GET,
            Method::Post => Self::POST,
            Method::Put => Self::PUT,
            Method::Delete => Self::DELETE,
        }
    }
}

/// A request relative to the configured base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    /// JSON body, if any.
    pub body: Option<String>,
}

/// A fully read response. The body has been drained before this is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("connection failed: {0}")]
    Connection(String),
}

impl TransportError {
    /// Separates "never reached the remote" from other HTTP failures.
    fn from_send(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::Connection(err.to_string())
        } else {
            Self::Http(err)
        }
    }
}

/// Anything that can carry an [`ApiRequest`] to the remote.
pub trait Transport: Send + Sync {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        (**self).send(request)
    }
}

/// Blocking HTTP transport authenticating with API id/key headers.
pub struct HttpTransport {
    base_url: String,
    api_id: String,
    api_key: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("abp-reconcile/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TransportError::Build)?;

        Ok(Self {
            base_url: config.base_url().to_string(),
            api_id: config.api_id.clone(),
            api_key: config.api_key.clone(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);
        debug!(method = %request.method, %url, "HTTP request");

        let mut builder = self
            .client
            .request(request.method.into(), &url)
            .header("x-API-Id", &self.api_id)
            .header("x-API-Key", &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = &request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder.send().map_err(TransportError::from_send)?;
        let status = response.status().as_u16();
        // `text` consumes the response and releases the connection.
        let body = response.text()?;

        Ok(ApiResponse { status, body })
    }
}
