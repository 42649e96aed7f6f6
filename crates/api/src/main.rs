use anyhow::Context;

use itemservice_api::config::{self, ApiConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (tracing_config, warning) = config::tracing_config_from_env();
    itemservice_observability::init(&tracing_config);
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let config = ApiConfig::from_env()?;
    let app = itemservice_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
