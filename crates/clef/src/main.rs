//! Clef demo server - Entry Point
//!
//! Serves a page that logs users in through Clef and shows their profile.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use clef::{ClefClient, config::{Config, api}, server::DemoServer};

#[derive(Parser, Debug)]
#[command(name = "clef-demo")]
#[command(about = "Demo login server for the Clef API")]
#[command(version)]
struct Cli {
    /// Clef application id
    #[arg(long, env = "CLEF_APP_ID")]
    app_id: String,

    /// Clef application secret
    #[arg(long, env = "CLEF_APP_SECRET", hide_env_values = true)]
    app_secret: String,

    /// Clef API base URL
    #[arg(long, env = "CLEF_BASE_URL", default_value = api::BASE_URL)]
    base_url: String,

    /// HTTP server port
    #[arg(long, default_value = "5000", env = "PORT")]
    port: u16,

    /// URL Clef redirects to after login (defaults to this server's /oauth_callback)
    #[arg(long, env = "CLEF_REDIRECT_URL")]
    redirect_url: Option<String>,

    /// Directory served under /static
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Before parsing, so `.env` values feed the `env` fallbacks
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        api_version = api::VERSION,
        "Starting Clef demo server"
    );

    let config = Config::new(cli.app_id, cli.app_secret)
        .with_base_url(cli.base_url);
    let client = ClefClient::new(config)?;

    let redirect_url = cli
        .redirect_url
        .unwrap_or_else(|| format!("http://localhost:{}/oauth_callback", cli.port));

    tracing::info!(
        port = cli.port,
        redirect_url = %redirect_url,
        "Running in HTTP mode"
    );

    DemoServer::new(client, redirect_url, cli.static_dir)
        .run(cli.port)
        .await
}
