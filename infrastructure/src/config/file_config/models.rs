//! Model selection from TOML (`[models]` section)

use duel_domain::{ConfigIssue, ConfigIssueCode, Model, Severity};
use serde::{Deserialize, Serialize};

/// Model selection from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// generator = "gpt-4o"        # Writes the question
/// solver = "gpt-4o-mini"      # Answers it; defaults to the generator
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub generator: Option<String>,
    pub solver: Option<String>,
}

impl FileModelsConfig {
    /// Parse a single model string, collecting issues for empty names.
    fn parse_single_model(
        field: &str,
        value: Option<&String>,
    ) -> (Option<Model>, Vec<ConfigIssue>) {
        match value {
            None => (None, vec![]),
            Some(s) if s.trim().is_empty() => (
                None,
                vec![ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    message: format!("models.{}: model name cannot be empty", field),
                }],
            ),
            Some(s) => {
                // Model::from_str is infallible; unknown names become Custom(...)
                let Ok(model) = s.trim().parse::<Model>();
                (Some(model), vec![])
            }
        }
    }

    pub fn parse_generator(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("generator", self.generator.as_ref())
    }

    pub fn parse_solver(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        Self::parse_single_model("solver", self.solver.as_ref())
    }
}
