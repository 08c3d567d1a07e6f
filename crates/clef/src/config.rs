//! Configuration for the Clef client.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Implemented Clef interface version.
    pub const VERSION: &str = "v1";

    /// Base URL for the Clef API. Paths are resolved relative to it, so the
    /// trailing slash is significant.
    pub const BASE_URL: &str = "https://clef.io/api/";

    /// Script that renders the hosted login button.
    pub const LOGIN_BUTTON_SCRIPT: &str = "https://clef.io/v3/clef.js";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Maximum keepalive connections.
    pub const MAX_KEEPALIVE: usize = 10;

    /// Keepalive expiry.
    pub const KEEPALIVE_EXPIRY: Duration = Duration::from_secs(30);
}

/// Client configuration.
#[derive(Clone)]
pub struct Config {
    /// Application id issued by Clef.
    pub app_id: String,

    /// Application secret issued by Clef.
    pub app_secret: String,

    /// Base URL of the Clef API (for testing with mock servers).
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration for the public Clef API.
    #[must_use]
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            base_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    ///
    /// The mock is expected to serve the API under `/api/`.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            app_id: "test-app-id".to_string(),
            app_secret: "test-app-secret".to_string(),
            base_url: format!("{}/api/", base_url.trim_end_matches('/')),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Create configuration from environment variables.
    ///
    /// Reads `CLEF_APP_ID`, `CLEF_APP_SECRET` and optionally `CLEF_BASE_URL`.
    /// Loading a `.env` file first is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns error if the credentials are missing.
    pub fn from_env() -> anyhow::Result<Self> {
        let app_id = std::env::var("CLEF_APP_ID")
            .map_err(|_| anyhow::anyhow!("CLEF_APP_ID is not set"))?;
        let app_secret = std::env::var("CLEF_APP_SECRET")
            .map_err(|_| anyhow::anyhow!("CLEF_APP_SECRET is not set"))?;

        let config = Self::new(app_id, app_secret);
        Ok(match std::env::var("CLEF_BASE_URL") {
            Ok(base_url) => config.with_base_url(base_url),
            Err(_) => config,
        })
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("app_id", &self.app_id)
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .field("connect_timeout", &self.connect_timeout)
            .finish_non_exhaustive()
    }
}
