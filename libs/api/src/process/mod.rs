use axum::{
    extract::{Request, State},
    Json,
};

use crate::extract::extract_text;
use crate::invoke::process_text;
use crate::response::ApiResponse;
use crate::task::TaskType;
use crate::{ApiError, ApiState};

pub mod request;
pub mod response;

use self::request::{Content, Submission};
use self::response::ProcessResponse;

/// Process text or an uploaded file with the requested task.
pub async fn process(
    State(state): State<ApiState>,
    req: Request,
) -> ApiResponse<Json<ProcessResponse>> {
    let submission = Submission::read(req).await?;

    let Some(task) = submission.task else {
        return Err(ApiError::ClientError(
            "Task type is required".to_string(),
        ));
    };
    let task: TaskType = task.parse()?;

    match submission.content {
        Some(Content::Text(text)) => {
            let result =
                process_text(state.chat.as_ref(), &state.catalog, task, &text)
                    .await?;

            Ok(Json(ProcessResponse {
                status: "success".to_string(),
                filename: None,
                task,
                result,
            }))
        }
        Some(Content::File { name, bytes }) => {
            if name.is_empty() {
                return Err(ApiError::ClientError(
                    "No selected file".to_string(),
                ));
            }

            let text = extract_text(&name, &bytes)?;
            let result =
                process_text(state.chat.as_ref(), &state.catalog, task, &text)
                    .await?;

            Ok(Json(ProcessResponse {
                status: "success".to_string(),
                filename: Some(name),
                task,
                result,
            }))
        }
        None => Err(ApiError::ClientError(
            "No text or file provided".to_string(),
        )),
    }
}
