//! tasklistd: serve the task list over HTTP.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tasklist::{App, AppConfig};

const DEFAULT_LOG_FILTER: &str = "info,tasklist=debug,tasklist_store=debug,tasklist_http=debug";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::from_env().context("failed to read configuration")?;
    tracing::info!(
        addr = %config.server.socket_addr(),
        seeded = config.store.seed.len(),
        first_id = %config.store.first_id,
        "starting tasklistd"
    );

    let app = App::new(config).context("failed to initialize store")?;
    app.run(shutdown_signal()).await.context("server failed")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
