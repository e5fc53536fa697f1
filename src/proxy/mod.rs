//! Proxy fetch pipeline.
//!
//! A proxied call goes through three steps: reject a blank URL, substitute
//! `{{variables}}` from the environment, then GET the result and normalize
//! the outcome. There are no retries and no caching; every call stands alone.

pub mod config;
pub mod error;
pub mod fetcher;

pub use config::FetchConfig;
pub use error::{Detail, FetchError};
pub use fetcher::ProxyFetcher;
