use anyhow::Context;
use dotenvy::dotenv;
use lydia::logging::init_tracing;
use lydia::metrics::{init_metrics, metrics_app};
use lydia::router::init_router;
use lydia::state::init_app_state;
use lydia_config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing()?;

    let server_config = ServerConfig::from_env();
    let state = init_app_state().await?;

    if let Some(handle) = init_metrics()? {
        let listener = tokio::net::TcpListener::bind(&server_config.metrics_addr)
            .await
            .with_context(|| format!("Failed to bind {}", server_config.metrics_addr))?;
        tracing::info!(addr = %server_config.metrics_addr, "Metrics listening");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, metrics_app(handle)).await {
                tracing::error!(error = %e, "Metrics server stopped");
            }
        });
    }

    let app = init_router(state);
    let listener = tokio::net::TcpListener::bind(&server_config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", server_config.addr))?;

    tracing::info!(addr = %server_config.addr, "Server running, Swagger UI at /swagger-ui");
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
