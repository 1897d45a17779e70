use genai_proxy::config::GenaiProxyConfig;
use genai_proxy::startup::Application;
use service_core::observability::{init_tracing, otlp_endpoint_from_env};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let otlp_endpoint = otlp_endpoint_from_env();
    init_tracing("genai-proxy", "info", otlp_endpoint.as_deref());

    let config = GenaiProxyConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    if !config.gemini.api_key_configured() {
        tracing::warn!("GEMINI_API_KEY is not set; generate requests will fail until it is");
    }

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
