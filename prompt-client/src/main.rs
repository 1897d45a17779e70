use prompt_client::config::get_configuration;
use prompt_client::services::ProxyClient;
use prompt_client::startup::build_router;
use prompt_client::AppState;
use service_core::observability::{init_tracing, otlp_endpoint_from_env};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    let otlp_endpoint = otlp_endpoint_from_env();
    init_tracing("prompt-client", "info", otlp_endpoint.as_deref());

    let client = ProxyClient::new(configuration.proxy.clone());
    info!(
        proxy_url = %client.url(),
        model = %configuration.proxy.model,
        "Initialized proxy client"
    );

    let app = build_router(AppState::new(
        Arc::new(client),
        configuration.proxy.model.clone(),
    ));

    let address = format!(
        "{}:{}",
        configuration.server.host, configuration.server.port
    );
    let listener = tokio::net::TcpListener::bind(&address).await.map_err(|e| {
        tracing::error!("Failed to bind TCP listener to {}: {}", address, e);
        anyhow::anyhow!("Failed to bind to address {}: {}", address, e)
    })?;

    info!("Starting prompt-client on {}", address);
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
