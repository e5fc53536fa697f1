//! Integration tests module for REST Relay
//!
//! Shared helpers for building a relay against temporary directories and a
//! fixed environment mapping.

pub mod router_test;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use rest_relay::environment::Environment;
use rest_relay::proxy::{FetchConfig, ProxyFetcher};
use rest_relay::server::{create_router, AppState};
use serde_json::Value;
use std::sync::{Arc, Once};
use tempfile::TempDir;
use tower::ServiceExt;

static INIT: Once = Once::new();

/// Initialize test environment (run once)
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// A relay wired to temporary public and downloads directories.
///
/// The directories live as long as this value.
pub struct TestRelay {
    pub state: AppState,
    pub public: TempDir,
    pub downloads: TempDir,
}

impl TestRelay {
    pub fn new(pairs: &[(&str, &str)]) -> Self {
        Self::with_environment(Environment::from_pairs(pairs.iter().copied()))
    }

    pub fn with_environment(environment: Environment) -> Self {
        init_test_env();

        let public = TempDir::new().expect("Failed to create public dir");
        let downloads = TempDir::new().expect("Failed to create downloads dir");
        std::fs::write(
            public.path().join("index.html"),
            "<!doctype html><title>REST Relay</title>",
        )
        .expect("Failed to write index.html");

        let fetcher = ProxyFetcher::new(Arc::new(environment), &FetchConfig::default())
            .expect("Failed to build fetcher");
        let state = AppState::new(fetcher, downloads.path(), public.path());

        Self {
            state,
            public,
            downloads,
        }
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone())
    }
}

/// Sends a JSON POST through the router and returns status and parsed body
pub async fn post_json(router: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}
