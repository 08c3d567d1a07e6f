//! Clef API client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - Form-encoded requests carrying the application credentials
//! - Status-driven decoding into response models or [`ClientError`]
//! - Opt-in `debug` dumps of raw requests and responses

mod middleware;

pub use middleware::DumpMiddleware;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult, ProviderError};
use crate::models::{AuthorizeResponse, InfoResponse, LogoutResponse, SwagRequest, SwagResponse};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Clef API client.
///
/// Immutable after construction; clones share the connection pool, so one
/// instance can serve any number of concurrent calls.
#[derive(Clone)]
pub struct ClefClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// API base URL, always ending in `/`.
    base_url: Url,

    /// Application id.
    app_id: String,

    /// Application secret.
    app_secret: String,
}

impl ClefClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .pool_max_idle_per_host(api::MAX_KEEPALIVE)
            .pool_idle_timeout(api::KEEPALIVE_EXPIRY)
            .gzip(true)
            .build()?;

        Ok(Self::with_http_client(config, client)?)
    }

    /// Create a client on top of an existing reqwest client.
    ///
    /// Timeouts from `config` are ignored; the supplied client's own apply.
    pub fn with_http_client(config: Config, client: Client) -> ClientResult<Self> {
        let mut base_url = config.base_url;
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url = Url::parse(&base_url)?;

        let client = ClientBuilder::new(client).with(DumpMiddleware).build();

        Ok(Self {
            client,
            base_url,
            app_id: config.app_id,
            app_secret: config.app_secret,
        })
    }

    /// API base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Application id this client authenticates as.
    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Exchange an OAuth code for an access token.
    pub async fn authorize(&self, code: &str) -> ClientResult<AuthorizeResponse> {
        let form = self.credentials_form(&[("code", code)]);
        let request = self.build_request(Method::POST, "authorize", Some(form.as_slice()))?;

        self.execute(request).await
    }

    /// Fetch the profile of the user an access token belongs to.
    ///
    /// A rejected token fails with [`ClientError::InvalidToken`].
    pub async fn info(&self, access_token: &str) -> ClientResult<InfoResponse> {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("access_token", access_token)
            .finish();
        let request = self.build_request(Method::GET, &format!("info?{query}"), None)?;

        self.execute(request).await
    }

    /// Exchange a logout token for the Clef id whose session ended.
    pub async fn logout(&self, logout_token: &str) -> ClientResult<LogoutResponse> {
        let form = self.credentials_form(&[("logout_token", logout_token)]);
        let request = self.build_request(Method::POST, "logout", Some(form.as_slice()))?;

        self.execute(request).await
    }

    /// Order swag items.
    pub async fn swag(&self, order: &SwagRequest) -> ClientResult<SwagResponse> {
        let form = self.credentials_form(&order.form_fields());
        let request = self.build_request(Method::POST, "swag", Some(form.as_slice()))?;

        self.execute(request).await
    }

    /// Resolve an operation path against the base URL.
    pub fn resolve(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// Build a raw API request.
    ///
    /// A present `form` is url-encoded into the body.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        form: Option<&[(&str, &str)]>,
    ) -> ClientResult<RequestBuilder> {
        let url = self.resolve(path)?;
        let request = self.client.request(method, url);

        Ok(match form {
            Some(fields) => {
                let body = url::form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(fields)
                    .finish();
                request.header(CONTENT_TYPE, FORM_CONTENT_TYPE).body(body)
            }
            None => request,
        })
    }

    /// Execute a raw API request and decode the response.
    ///
    /// Any status other than 200 is decoded as a [`ProviderError`]. An
    /// unreadable or malformed error body still fails, with an empty error.
    pub async fn execute<T>(&self, request: RequestBuilder) -> ClientResult<T>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await?;
        let status = response.status();

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "Error body:\n\n{}\n", body);

            let error: ProviderError = serde_json::from_str(&body).unwrap_or_default();
            return Err(ClientError::from_provider(status.as_u16(), error));
        }

        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), "Response body:\n\n{}\n", body);

        serde_json::from_str(&body).map_err(ClientError::from)
    }

    /// Application credentials followed by `fields`.
    fn credentials_form<'a>(&'a self, fields: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
        let mut form = Vec::with_capacity(fields.len() + 2);
        form.extend_from_slice(fields);
        form.push(("app_id", self.app_id.as_str()));
        form.push(("app_secret", self.app_secret.as_str()));
        form
    }
}

impl std::fmt::Debug for ClefClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClefClient")
            .field("base_url", &self.base_url.as_str())
            .field("app_id", &self.app_id)
            .finish_non_exhaustive()
    }
}
