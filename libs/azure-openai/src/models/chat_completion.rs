pub mod implementation;

use async_trait::async_trait;
use reqwest::Body;
use serde::{Deserialize, Serialize};

/// Chat-completions capability, object safe so callers can substitute a
/// fake in tests.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> anyhow::Result<ChatCompletionResponse>;
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

impl Into<Body> for ChatCompletionRequest {
    fn into(self) -> Body {
        let body = serde_json::to_string(&self).unwrap();
        Body::from(body)
    }
}
