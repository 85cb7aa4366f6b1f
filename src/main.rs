use std::sync::Arc;

use azure_openai::models::Client;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Missing provider credentials surface when a request reaches the
    // provider, not at startup.
    let endpoint = std::env::var("AZURE_OPENAI_ENDPOINT").unwrap_or_default();
    let api_key = std::env::var("AZURE_OPENAI_API_KEY").unwrap_or_default();
    let deployment = std::env::var("AZURE_OPENAI_DEPLOYMENT")
        .unwrap_or_else(|_| "gpt-4o".to_string());

    let chat = Client::new(&endpoint, &api_key, &deployment);

    let router = api::serve(Arc::new(chat), "config.json").await?;

    let port = std::env::var("TEXTPROC_PORT")
        .ok()
        .and_then(|port| port.parse::<u16>().ok())
        .unwrap_or(5000);
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
