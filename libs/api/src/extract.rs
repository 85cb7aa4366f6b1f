use std::path::Path;

use crate::response::ApiResponse;
use crate::ApiError;

/// Convert an uploaded file's bytes to plain text, keyed on the lowercase
/// file extension. Unsupported extensions are rejected before any decode.
pub fn extract_text(filename: &str, bytes: &[u8]) -> ApiResponse<String> {
    let extension = Path::new(filename)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default();

    match extension.as_str() {
        ".txt" => String::from_utf8(bytes.to_vec())
            .map_err(|e| ApiError::ServerError(e.to_string())),
        ".csv" => read_csv(bytes),
        ".json" => read_json(bytes),
        _ => Err(ApiError::ClientError(format!(
            "Unsupported file type: {}",
            extension
        ))),
    }
}

// Every cell of every row, row-major, space-joined.
fn read_csv(bytes: &[u8]) -> ApiResponse<String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut cells = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| ApiError::ServerError(e.to_string()))?;
        cells.extend(record.iter().map(str::to_string));
    }

    Ok(cells.join(" "))
}

fn read_json(bytes: &[u8]) -> ApiResponse<String> {
    let value: serde_json::Value = serde_json::from_slice(bytes)
        .map_err(|e| ApiError::ServerError(e.to_string()))?;

    serde_json::to_string(&value)
        .map_err(|e| ApiError::ServerError(e.to_string()))
}
