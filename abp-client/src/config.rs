use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Connection settings for the bot-management API.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the API (e.g. `https://api.imperva.com`).
    pub base_url: String,
    /// Sent as the `x-API-Id` header.
    pub api_id: String,
    /// Sent as the `x-API-Key` header.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Base URL without a trailing slash, ready for path concatenation.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.imperva.com".to_string(),
            api_id: String::new(),
            api_key: String::new(),
            timeout_secs: 60,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_id", &self.api_id)
            .field("api_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
