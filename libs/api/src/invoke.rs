use azure_openai::models::chat_completion::{
    ChatCompletion, ChatCompletionRequest, Message,
};

use crate::response::{ApiResponse, IntoApiResponse};
use crate::task::{PromptCatalog, TaskType};
use crate::ApiError;

const MAX_TOKENS: i32 = 300;

/// Resolve the system prompt for the task and run one chat completion:
/// a system message with the prompt and a user message with the input.
pub async fn process_text(
    chat: &dyn ChatCompletion,
    catalog: &PromptCatalog,
    task: TaskType,
    text: &str,
) -> ApiResponse<String> {
    let messages = vec![
        Message {
            role: "system".to_string(),
            content: catalog.resolve(task).to_string(),
        },
        Message {
            role: "user".to_string(),
            content: text.to_string(),
        },
    ];

    let response = chat
        .chat_completion(ChatCompletionRequest {
            messages,
            max_tokens: Some(MAX_TOKENS),
        })
        .await
        .into_server_error()?;

    let Some(choice) = response.choices.into_iter().next() else {
        return Err(ApiError::ServerError(
            "no completion returned".to_string(),
        ));
    };

    Ok(choice.message.content)
}
