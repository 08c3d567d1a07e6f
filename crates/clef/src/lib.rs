//! Clef API client
//!
//! An async client for the Clef authentication API. Exchanges the code from
//! Clef's login redirect for an access token, fetches the user's profile with
//! that token, and ends sessions when Clef delivers a logout token.
//!
//! # Features
//!
//! - **Typed errors**: an expired or unknown token is its own
//!   [`ClientError::InvalidToken`] variant
//! - **Shareable**: one [`ClefClient`] serves concurrent calls without locking
//! - **Demo server**: an axum app that walks a browser through the login flow
//!
//! # Example
//!
//! ```no_run
//! use clef::{ClefClient, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = ClefClient::new(config)?;
//!
//!     let authorized = client.authorize("code-from-redirect").await?;
//!     match client.info(&authorized.access_token).await {
//!         Ok(response) => println!("{:?}", response.info),
//!         Err(err) if err.is_invalid_token() => println!("not logged in"),
//!         Err(err) => return Err(err.into()),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod server;

pub use client::ClefClient;
pub use config::Config;
pub use error::{ClientError, ProviderError, ServerError};
