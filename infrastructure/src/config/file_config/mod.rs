//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod duel;
mod models;
mod output;
mod provider;

pub use duel::FileDuelConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use provider::FileProviderConfig;

use duel_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Generator / solver model selection
    pub models: FileModelsConfig,
    /// Round and validation settings
    pub duel: FileDuelConfig,
    /// Completion endpoint settings
    pub provider: FileProviderConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks empty model names, unknown grammar names and zero counters.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.models.parse_generator().1);
        issues.extend(self.models.parse_solver().1);
        issues.extend(self.duel.to_params().1);

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use duel_domain::{AnswerGrammar, ConfigIssueCode, Model, OutputFormat};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[models]
generator = "gpt-4o"
solver = "o3-mini"

[duel]
validation_attempts = 7
stop_on_first_mismatch = false
max_rounds = 2
answer_grammar = "bracketed"

[provider]
base_url = "http://localhost:8080"
max_tokens = 256
temperature = 0.2

[output]
format = "question"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.parse_generator().0, Some(Model::Gpt4o));
        assert_eq!(config.models.parse_solver().0, Some(Model::O3Mini));

        let (params, issues) = config.duel.to_params();
        assert!(issues.is_empty());
        assert_eq!(params.validation.attempts, 7);
        assert!(!params.validation.stop_on_first_mismatch);
        assert_eq!(params.max_rounds, 2);
        assert_eq!(params.grammar, AnswerGrammar::Bracketed);

        assert_eq!(config.provider.base_url, "http://localhost:8080");
        assert_eq!(config.provider.max_tokens, 256);
        assert_eq!(config.provider.temperature, Some(0.2));
        assert_eq!(config.provider.api_key_env, "OPENAI_API_KEY");

        assert_eq!(config.output.format, Some(OutputFormat::Question));
        assert!(!config.output.color);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: FileConfig = toml::from_str("[duel]\nmax_rounds = 5\n").unwrap();
        assert_eq!(config.duel.max_rounds, 5);
        assert_eq!(config.duel.validation_attempts, 5);
        assert!(config.duel.stop_on_first_mismatch);
        assert!(config.models.generator.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(FileConfig::default().validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let toml_str = r#"
[models]
generator = ""

[duel]
validation_attempts = 0
answer_grammar = "yaml"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert_eq!(issues.len(), 3);
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::EmptyModelName { field } if field == "generator"
        )));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::ZeroCount { field } if field == "duel.validation_attempts"
        )));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::InvalidEnumValue { field, .. } if field == "duel.answer_grammar"
        )));
    }
}
