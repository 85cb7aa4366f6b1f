use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Multipart, Request},
    http::header::CONTENT_TYPE,
    Form, RequestExt,
};

use crate::response::ApiResponse;
use crate::ApiError;

/// The single content source of a request, decided once at the boundary.
pub enum Content {
    Text(String),
    File { name: String, bytes: Bytes },
}

pub struct Submission {
    pub task: Option<String>,
    pub content: Option<Content>,
}

impl Submission {
    /// Parse a multipart or urlencoded form body. An inline `text` field
    /// wins over a `file` field when both are present.
    pub async fn read(req: Request) -> ApiResponse<Self> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.starts_with("multipart/form-data") {
            let multipart = req
                .extract::<Multipart, _>()
                .await
                .map_err(|e| ApiError::ClientError(e.to_string()))?;

            Self::read_multipart(multipart).await
        } else {
            let Form(fields) = req
                .extract::<Form<HashMap<String, String>>, _>()
                .await
                .map_err(|e| ApiError::ClientError(e.to_string()))?;

            Ok(Submission {
                task: fields.get("task").cloned(),
                content: fields.get("text").cloned().map(Content::Text),
            })
        }
    }

    async fn read_multipart(mut multipart: Multipart) -> ApiResponse<Self> {
        let mut task = None;
        let mut text = None;
        let mut file = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::ClientError(e.to_string()))?
        {
            let field_name = field.name().unwrap_or_default().to_string();
            match field_name.as_str() {
                "task" => {
                    task = Some(field.text().await.map_err(|e| {
                        ApiError::ClientError(e.to_string())
                    })?);
                }
                "text" => {
                    text = Some(field.text().await.map_err(|e| {
                        ApiError::ClientError(e.to_string())
                    })?);
                }
                "file" => {
                    let name =
                        field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await.map_err(|e| {
                        ApiError::ClientError(e.to_string())
                    })?;
                    file = Some(Content::File { name, bytes });
                }
                _ => {}
            }
        }

        let content = match text {
            Some(text) => Some(Content::Text(text)),
            None => file,
        };

        Ok(Submission { task, content })
    }
}
