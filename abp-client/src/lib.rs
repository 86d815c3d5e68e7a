//! Entity repository for the bot-management API.
//!
//! [`AbpClient`] exposes fetch, list, create, update and delete for every
//! entity kind, translating status codes and JSON bodies into typed results.
//! The network sits behind the [`Transport`] trait; [`HttpTransport`] is the
//! blocking `reqwest` implementation.
//!
//! # Example
//!
//! ```no_run
//! use abp_client::{AbpClient, ClientConfig};
//! use abp_model::wire::SiteResponse;
//!
//! let config = ClientConfig {
//!     api_id: "12345".to_string(),
//!     api_key: "secret".to_string(),
//!     ..Default::default()
//! };
//! let client = AbpClient::from_config(&config)?;
//! let sites: Vec<SiteResponse> = client.list_for_caller()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod client;
mod config;
mod error;
mod transport;

pub use client::{ACCOUNT_PATH, AbpClient, ROOT_PATH};
pub use config::ClientConfig;
pub use error::{Action, ClientError, ClientResult, Operation};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport, TransportError};
