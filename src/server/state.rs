//! Application state for the relay server.

use crate::config::RelayConfig;
use crate::environment::Environment;
use crate::proxy::ProxyFetcher;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// State shared across all request handlers.
///
/// Everything in here is read-only after startup, so handlers share it
/// without locking.
#[derive(Clone)]
pub struct AppState {
    fetcher: Arc<ProxyFetcher>,
    downloads_dir: Arc<PathBuf>,
    public_dir: Arc<PathBuf>,
}

impl AppState {
    pub fn new(
        fetcher: ProxyFetcher,
        downloads_dir: impl Into<PathBuf>,
        public_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            downloads_dir: Arc::new(downloads_dir.into()),
            public_dir: Arc::new(public_dir.into()),
        }
    }

    /// Builds the state from configuration and an already loaded environment
    pub fn from_config(config: &RelayConfig, environment: Environment) -> reqwest::Result<Self> {
        let fetcher = ProxyFetcher::new(Arc::new(environment), &config.fetch_config())?;
        Ok(Self::new(
            fetcher,
            config.downloads_dir.clone(),
            config.public_dir.clone(),
        ))
    }

    pub fn fetcher(&self) -> &ProxyFetcher {
        &self.fetcher
    }

    pub fn downloads_dir(&self) -> &Path {
        &self.downloads_dir
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }
}
