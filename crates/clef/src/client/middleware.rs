//! Middleware for the HTTP client.
//!
//! [`DumpMiddleware`] writes every outgoing request and the status line of
//! its response to the `debug` log. Nothing is emitted unless the tracing
//! filter enables `debug` for this crate.

use std::fmt::Write as _;

use async_trait::async_trait;
use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Form fields whose values never reach the log.
const REDACTED_FIELDS: &[&str] = &["app_secret"];

/// Logs raw requests and response heads at `debug` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct DumpMiddleware;

#[async_trait]
impl Middleware for DumpMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        if tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!("Request:\n\n{}\n", dump_request(&req));
        }

        let response = next.run(req, extensions).await?;

        tracing::debug!(
            status = response.status().as_u16(),
            url = %response.url(),
            headers = ?response.headers(),
            "Response"
        );

        Ok(response)
    }
}

/// Render a request roughly as it goes over the wire.
fn dump_request(req: &Request) -> String {
    let mut out = format!("{} {}\n", req.method(), req.url());
    for (name, value) in req.headers() {
        let _ = writeln!(out, "{}: {}", name, value.to_str().unwrap_or("<binary>"));
    }

    if let Some(bytes) = req.body().and_then(reqwest::Body::as_bytes) {
        out.push('\n');
        out.push_str(&redact_form(bytes));
    }
    out
}

/// Re-encode a form body with secret values masked.
fn redact_form(body: &[u8]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(url::form_urlencoded::parse(body).map(|(key, value)| {
            if REDACTED_FIELDS.contains(&key.as_ref()) {
                (key, "***".into())
            } else {
                (key, value)
            }
        }))
        .finish()
}
