use anyhow::Context;
use clap::Parser;
use othello_server::{api, Config, SharedGame};
use std::future::Future;
use std::io;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = Config::parse();
    let app = api::router(SharedGame::default(), &config.static_dir);

    let listener = TcpListener::bind(config.addr())
        .await
        .with_context(|| format!("failed to bind {}", config.addr()))?;
    info!(
        addr = %config.addr(),
        static_dir = %config.static_dir.display(),
        "serving othello"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    wait_for_signal(tokio::signal::ctrl_c()).await
}

/// Resolve once `signal` fires. If listening fails, log it and never resolve.
async fn wait_for_signal(signal: impl Future<Output = io::Result<()>>) {
    match signal.await {
        Ok(()) => info!("shutting down"),
        Err(err) => {
            error!(%err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    }
}
