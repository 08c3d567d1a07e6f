//! HTTP routes for the demo server.
//!
//! The access token lives in a client-side cookie; every page view checks it
//! against Clef with an `info` call.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::pages;
use crate::client::ClefClient;
use crate::error::{ServerError, ServerResult};
use crate::models::UserInfo;

/// Cookie holding the Clef access token.
pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Shared state for HTTP handlers.
pub struct AppState {
    pub client: Arc<ClefClient>,
    /// URL Clef redirects back to after login.
    pub redirect_url: String,
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LogoutParams {
    pub logout_token: Option<String>,
}

/// Create the HTTP router for the demo.
pub fn create_router(
    client: Arc<ClefClient>,
    redirect_url: String,
    static_dir: impl Into<PathBuf>,
) -> Router {
    let state = Arc::new(AppState {
        client,
        redirect_url,
    });

    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(health_check))
        .route("/oauth_callback", get(handle_oauth_callback))
        .route("/logout", get(handle_logout_get).post(handle_logout_post))
        .nest_service("/static", ServeDir::new(static_dir.into()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "clef-demo",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// `GET /`
async fn handle_index(State(state): State<Arc<AppState>>, jar: CookieJar) -> Response {
    let render = |profile: Option<&UserInfo>, error: Option<&str>| {
        Html(pages::render_index(
            state.client.app_id(),
            &state.redirect_url,
            profile,
            error,
        ))
    };

    let token = jar
        .get(ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value().to_owned())
        .filter(|token| !token.is_empty());

    let Some(token) = token else {
        return render(None, None).into_response();
    };

    match state.client.info(&token).await {
        Ok(response) => render(response.info.as_ref(), None).into_response(),
        Err(err) if err.is_invalid_token() => {
            tracing::debug!("Stored access token rejected, treating as logged out");
            let jar = jar.remove(removal_cookie());
            (jar, render(None, None)).into_response()
        }
        Err(err) => {
            tracing::warn!(error = %err, "Failed to fetch Clef user info");
            let message = err.to_string();
            render(None, Some(&message)).into_response()
        }
    }
}

/// `GET /oauth_callback`
///
/// Exchanges the code from Clef's redirect and stores the access token.
async fn handle_oauth_callback(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CallbackQuery>,
    jar: CookieJar,
) -> ServerResult<Response> {
    let code = query
        .code
        .filter(|code| !code.is_empty())
        .ok_or(ServerError::MissingParameter("code"))?;

    let authorized = state.client.authorize(&code).await.inspect_err(|err| {
        tracing::warn!(error = %err, "Clef authorization failed");
    })?;

    tracing::info!("User logged in");

    let cookie = Cookie::build((ACCESS_TOKEN_COOKIE, authorized.access_token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok(redirect_home(jar.add(cookie)))
}

/// `GET /logout`
async fn handle_logout_get(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LogoutParams>,
    jar: CookieJar,
) -> ServerResult<Response> {
    logout(&state, params, jar).await
}

/// `POST /logout`
///
/// Clef's logout webhook posts the logout token as a form field.
async fn handle_logout_post(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(params): Form<LogoutParams>,
) -> ServerResult<Response> {
    logout(&state, params, jar).await
}

async fn logout(state: &AppState, params: LogoutParams, jar: CookieJar) -> ServerResult<Response> {
    let logout_token = params
        .logout_token
        .filter(|token| !token.is_empty())
        .ok_or(ServerError::MissingParameter("logout_token"))?;

    let logged_out = state.client.logout(&logout_token).await.inspect_err(|err| {
        tracing::warn!(error = %err, "Clef logout failed");
    })?;

    tracing::info!(clef_id = logged_out.clef_id, "User logged out");

    Ok(redirect_home(jar.remove(removal_cookie())))
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build(ACCESS_TOKEN_COOKIE).path("/").build()
}

fn redirect_home(jar: CookieJar) -> Response {
    (StatusCode::FOUND, jar, [(header::LOCATION, "/")]).into_response()
}
