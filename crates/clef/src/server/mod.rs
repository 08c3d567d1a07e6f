//! Demo web server.
//!
//! Walks a browser through Clef's hosted login:
//! - `/` renders the login button, or the profile for a valid token cookie
//! - `/oauth_callback` exchanges the code and stores the access token
//! - `/logout` receives Clef's logout token and clears the cookie
//! - `/static` serves assets from disk

mod pages;
pub mod routes;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use crate::client::ClefClient;

/// Demo login server.
pub struct DemoServer {
    client: Arc<ClefClient>,

    /// URL Clef redirects back to after login.
    redirect_url: String,

    /// Directory served under `/static`.
    static_dir: PathBuf,
}

impl DemoServer {
    /// Create a new demo server.
    #[must_use]
    pub fn new(client: ClefClient, redirect_url: String, static_dir: PathBuf) -> Self {
        Self {
            client: Arc::new(client),
            redirect_url,
            static_dir,
        }
    }

    /// Run the server until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns error on server failure.
    pub async fn run(self, port: u16) -> anyhow::Result<()> {
        let router = routes::create_router(self.client, self.redirect_url, self.static_dir);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for DemoServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoServer")
            .field("redirect_url", &self.redirect_url)
            .field("static_dir", &self.static_dir)
            .finish_non_exhaustive()
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
