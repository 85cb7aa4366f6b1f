use std::sync::Arc;

use axum::{routing::get, routing::post, Router};
use azure_openai::models::chat_completion::ChatCompletion;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::task::PromptCatalog;

pub mod extract;
pub mod health;
pub mod invoke;
pub mod not_found;
pub mod process;
mod response;
pub mod task;

#[derive(Debug)]
pub enum ApiError {
    ClientError(String),
    ServerError(String),
}

#[derive(Clone)]
pub struct ApiState {
    chat: Arc<dyn ChatCompletion>,
    catalog: Arc<PromptCatalog>,
}

/// Startup configuration, read from a JSON document at the workspace root.
/// Deserialization fails if any task prompt is missing.
#[derive(Debug, Deserialize)]
pub struct Config {
    pub prompts: PromptCatalog,
    pub example_text: Option<ExampleText>,
}

#[derive(Debug, Deserialize)]
pub struct ExampleText {
    pub title: Option<String>,
    pub content: String,
}

pub async fn serve(
    chat: Arc<dyn ChatCompletion>,
    config_name: &str,
) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    let config: Config = util::load_config(config_name)?;

    let state = ApiState {
        chat,
        catalog: Arc::new(config.prompts),
    };

    let router = Router::new()
        .route("/process", post(process::process))
        .route("/health", get(health::get_health))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .fallback(not_found::get_404);

    Ok(router)
}
