use anyhow::Context;
use async_trait::async_trait;

use crate::models::Client;

use super::{ChatCompletion, ChatCompletionRequest, ChatCompletionResponse};

#[async_trait]
impl ChatCompletion for Client {
    async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> anyhow::Result<ChatCompletionResponse> {
        let text = self.string_response(request).await?;

        let response =
            serde_json::from_str(&text).context("failed to parse response")?;

        Ok(response)
    }
}
