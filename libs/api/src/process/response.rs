use serde::Serialize;

use crate::task::TaskType;

#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub task: TaskType,
    pub result: String,
}
