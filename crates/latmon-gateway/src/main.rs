//! latmon gateway binary.
//!
//! - Config: first CLI argument, else `LATMON_CONFIG`, else `latmon.yaml`
//!   (built-in defaults when that default file is absent)
//! - Telemetry store loaded once before binding
//! - Graceful shutdown on Ctrl+C

use std::env;
use std::path::{Path, PathBuf};

use tracing_subscriber::{fmt, EnvFilter};

use latmon_core::Result;
use latmon_gateway::{app_state, config, router};

const DEFAULT_CONFIG_PATH: &str = "latmon.yaml";

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "latmon_gateway=info,latmon_core=info,tower_http=info".into()),
        )
        .init();

    let cfg = load_config()?;
    let listen = cfg.gateway.listen_addr()?;

    let state = app_state::AppState::from_config(cfg);
    tracing::info!(
        records = state.store().len(),
        regions = state.store().regions().len(),
        "telemetry ready"
    );
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen).await?;
    tracing::info!(listen = %listener.local_addr()?, "latmon-gateway starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("latmon-gateway stopped");
    Ok(())
}

fn load_config() -> Result<config::GatewayConfig> {
    let explicit = env::args().nth(1).or_else(|| env::var("LATMON_CONFIG").ok());
    match explicit {
        Some(path) => {
            let path = PathBuf::from(path);
            tracing::info!(path = %path.display(), "loading config");
            config::load_from_file(&path)
        }
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            tracing::info!(path = DEFAULT_CONFIG_PATH, "loading config");
            config::load_from_file(DEFAULT_CONFIG_PATH)
        }
        None => {
            tracing::info!("no config file; using defaults");
            Ok(config::GatewayConfig::default())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
