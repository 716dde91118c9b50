use anyhow::Context;

use weldstock_api::app::{build_app, build_services};
use weldstock_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    weldstock_observability::init();

    let config = ApiConfig::from_env().context("failed to load configuration")?;
    let app = build_app(build_services(&config));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
