//! REST Relay
//!
//! A small local tool for poking at JSON APIs from a browser. The user types a
//! URL, optionally containing `{{variable}}` placeholders; the relay fills them
//! in from a Postman environment export, performs the GET, and hands the JSON
//! back to the page. The page can then ask the relay to save that JSON to a
//! file named after the URL's last path segment.
//!
//! # Architecture
//!
//! - **environment**: loads the enabled variables of a Postman environment once
//!   at startup
//! - **variables**: `{{key}}` substitution, one pass per key in mapping order
//! - **proxy**: validates, substitutes and fetches; normalizes failures into
//!   [`proxy::FetchError`]
//! - **storage**: filename derivation and writing of saved responses
//! - **models**: request/response bodies of the HTTP interface
//! - **config**: server settings with defaults and validation
//! - **server**: axum router, handlers and error mapping
//!
//! # Example
//!
//! ```no_run
//! use rest_relay::environment::Environment;
//! use rest_relay::proxy::{FetchConfig, ProxyFetcher};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = Environment::from_pairs([("host", "api.example.com")]);
//! let fetcher = ProxyFetcher::new(Arc::new(env), &FetchConfig::default())?;
//!
//! let users = fetcher.fetch("https://{{host}}/users").await?;
//! println!("{}", users);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod environment;
pub mod models;
pub mod proxy;
pub mod server;
pub mod storage;
pub mod variables;
