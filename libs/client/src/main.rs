//! Manual integration-testing client: checks health, runs every task
//! against the example text from config.json, then uploads test.txt if it
//! exists. Failed calls print to the console instead of aborting the run.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
struct ClientConfig {
    example_text: ExampleText,
}

#[derive(Debug, Deserialize)]
struct ExampleText {
    content: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url = std::env::var("TEXTPROC_URL")
        .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    let config: ClientConfig = util::load_config("config.json")?;
    let client = reqwest::Client::new();

    println!("Health Check:");
    health_check(&client, &base_url).await;

    for (label, task) in [
        ("Summarization", "summarize"),
        ("Keyword Tagging", "tag"),
        ("Sentiment Analysis", "sentiment"),
        ("Complexity Analysis", "complexity"),
    ] {
        println!("\n{}:", label);
        process_text(&client, &base_url, &config.example_text.content, task)
            .await;
    }

    if Path::new("test.txt").exists() {
        println!("\nProcessing File:");
        process_file(&client, &base_url, "test.txt", "summarize").await;
    } else {
        println!("Could not process a file test.txt, as it does not exist!");
    }

    Ok(())
}

async fn health_check(client: &reqwest::Client, base_url: &str) {
    let result = client
        .get(format!("{}/health", base_url))
        .send()
        .await;

    print_response(result).await;
}

async fn process_text(
    client: &reqwest::Client,
    base_url: &str,
    text: &str,
    task: &str,
) {
    let result = client
        .post(format!("{}/process", base_url))
        .form(&[("text", text), ("task", task)])
        .send()
        .await;

    print_response(result).await;
}

async fn process_file(
    client: &reqwest::Client,
    base_url: &str,
    file_path: &str,
    task: &str,
) {
    let bytes = match tokio::fs::read(file_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("Exception occurred: {}", e);
            return;
        }
    };

    let part =
        reqwest::multipart::Part::bytes(bytes).file_name(file_path.to_string());
    let form = reqwest::multipart::Form::new()
        .text("task", task.to_string())
        .part("file", part);

    let result = client
        .post(format!("{}/process", base_url))
        .multipart(form)
        .send()
        .await;

    print_response(result).await;
}

async fn print_response(result: Result<reqwest::Response, reqwest::Error>) {
    match result {
        Ok(response) if response.status().is_success() => {
            match response.json::<Value>().await {
                Ok(body) => println!("{}", body),
                Err(e) => println!("Exception occurred: {}", e),
            }
        }
        Ok(response) => {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            println!("Error: {}, {}", status.as_u16(), text);
        }
        Err(e) => println!("Exception occurred: {}", e),
    }
}
