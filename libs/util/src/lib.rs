use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::de::DeserializeOwned;

pub fn workspace_dir() -> PathBuf {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .unwrap()
        .stdout;
    let cargo_path = Path::new(std::str::from_utf8(&output).unwrap().trim());
    cargo_path.parent().unwrap().to_path_buf()
}

pub fn load_config<T: DeserializeOwned>(config_name: &str) -> anyhow::Result<T> {
    let workspace_dir = workspace_dir();
    let config = std::fs::read_to_string(workspace_dir.join(config_name))
        .with_context(|| format!("failed to read {}", config_name))?;

    serde_json::from_str::<T>(&config)
        .with_context(|| format!("failed to parse {}", config_name))
}
