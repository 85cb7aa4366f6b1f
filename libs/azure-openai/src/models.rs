use anyhow::ensure;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Body, Client as HttpClient,
};

pub mod chat_completion;

static API_VERSION: &str = "2024-08-01-preview";

/// Azure OpenAI API client bound to a single deployment.
#[derive(Debug, Clone)]
pub struct Client {
    url: String,
    client: HttpClient,
}

impl Client {
    pub fn new(endpoint: &str, api_key: &str, deployment: &str) -> Self {
        let url = format!(
            "{}/openai/deployments/{}/chat/completions",
            endpoint.trim_end_matches('/'),
            deployment
        );
        let mut headers = HeaderMap::new();
        headers.insert("Accept", HeaderValue::from_str("*/*").unwrap());
        headers.insert(
            "Content-Type",
            HeaderValue::from_str("application/json").unwrap(),
        );
        headers.insert(
            "api-key",
            HeaderValue::from_str(api_key)
                .unwrap_or_else(|_| HeaderValue::from_static("")),
        );

        let client = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .build()
            .unwrap();

        Self { url, client }
    }

    async fn string_response<R: Into<Body>>(
        &self,
        request: R,
    ) -> anyhow::Result<String> {
        let response = self
            .client
            .post(&self.url)
            .query(&[("api-version", API_VERSION)])
            .body(request)
            .send()
            .await?;

        let status_code = response.status();
        let text = response.text().await;

        ensure!(
            status_code.is_success(),
            "status code: {}, response: {:?}",
            status_code,
            text
        );

        Ok(text?)
    }
}
