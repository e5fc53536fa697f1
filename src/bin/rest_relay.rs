//! REST Relay server binary entry point
//!
//! Loads settings and the Postman environment, then serves the browser UI and
//! the relay endpoints until Ctrl+C or SIGTERM.
//!
//! # Files
//!
//! - `rest-relay.json` (optional): `{"rest-relay": {"port": 3000, ...}}`
//! - `postman_environment.json` (optional): variables for `{{name}}` tokens
//!
//! Logging goes through `env_logger`; set `RUST_LOG` to change the filter.

use anyhow::Context;
use rest_relay::config::{apply_port_override, load_config_file, PORT_ENV_VAR};
use rest_relay::environment::load_environment_or_default;
use rest_relay::server::{self, AppState};
use std::path::Path;
use tokio::net::TcpListener;

const SETTINGS_FILE: &str = "rest-relay.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("rest_relay=info,tower_http=info"),
    )
    .init();

    log::info!("Starting REST Relay v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config_file(Path::new(SETTINGS_FILE)).map_err(anyhow::Error::msg)?;
    let port_override = std::env::var(PORT_ENV_VAR).ok();
    let config =
        apply_port_override(config, port_override.as_deref()).map_err(anyhow::Error::msg)?;

    let environment = load_environment_or_default(&config.environment_file);
    let state =
        AppState::from_config(&config, environment).context("failed to build HTTP client")?;

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    log::info!("Server listening on http://{}", address);
    log::info!("Open your browser at http://{}", address);

    server::serve(listener, state, shutdown_signal())
        .await
        .context("server error")?;

    log::info!("Server shut down gracefully");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => log::info!("Received Ctrl+C"),
        _ = terminate => log::info!("Received SIGTERM"),
    }
}
