use axum::Json;
use serde_json::{json, Value};

/// Static health status, no dependencies checked.
pub(super) async fn get_health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "message": "Text Processing API is running"
    }))
}
