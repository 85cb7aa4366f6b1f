use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ApiError;

/// The closed set of processing tasks the service supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Summarize,
    Tag,
    Sentiment,
    Complexity,
}

impl TaskType {
    pub const ALL: [TaskType; 4] = [
        TaskType::Summarize,
        TaskType::Tag,
        TaskType::Sentiment,
        TaskType::Complexity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Summarize => "summarize",
            TaskType::Tag => "tag",
            TaskType::Sentiment => "sentiment",
            TaskType::Complexity => "complexity",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summarize" => Ok(TaskType::Summarize),
            "tag" => Ok(TaskType::Tag),
            "sentiment" => Ok(TaskType::Sentiment),
            "complexity" => Ok(TaskType::Complexity),
            _ => Err(ApiError::ClientError(format!(
                "Unsupported task type: {}",
                s
            ))),
        }
    }
}

/// System prompts for every task, one field per variant so a config that
/// drops a task fails at load rather than at request time.
#[derive(Debug, Deserialize)]
pub struct PromptCatalog {
    summarize: String,
    tag: String,
    sentiment: String,
    complexity: String,
}

impl PromptCatalog {
    pub fn resolve(&self, task: TaskType) -> &str {
        match task {
            TaskType::Summarize => &self.summarize,
            TaskType::Tag => &self.tag,
            TaskType::Sentiment => &self.sentiment,
            TaskType::Complexity => &self.complexity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_supported_task() {
        for task in TaskType::ALL {
            assert_eq!(task.as_str().parse::<TaskType>().unwrap(), task);
        }
    }

    #[test]
    fn rejects_unknown_task() {
        let err = "translate".parse::<TaskType>().unwrap_err();
        match err {
            ApiError::ClientError(message) => {
                assert_eq!(message, "Unsupported task type: translate")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn catalog_requires_every_prompt() {
        let result = serde_json::from_str::<PromptCatalog>(
            r#"{ "summarize": "s", "tag": "t", "sentiment": "s" }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn catalog_resolves_per_task() {
        let catalog = serde_json::from_str::<PromptCatalog>(
            r#"{
                "summarize": "one",
                "tag": "two",
                "sentiment": "three",
                "complexity": "four"
            }"#,
        )
        .unwrap();

        assert_eq!(catalog.resolve(TaskType::Summarize), "one");
        assert_eq!(catalog.resolve(TaskType::Complexity), "four");
    }
}
