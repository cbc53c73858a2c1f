//! Duel settings from TOML (`[duel]` section)

use duel_application::{DuelParams, ValidationParams};
use duel_domain::{AnswerGrammar, ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Raw duel configuration from TOML
///
/// # Example
///
/// ```toml
/// [duel]
/// validation_attempts = 5           # Times the solver is asked each question
/// stop_on_first_mismatch = true     # false = collect every attempt
/// max_rounds = 3                    # Generate → validate rounds before giving up
/// answer_grammar = "lenient"        # "bracketed", "lenient" or "plain"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDuelConfig {
    pub validation_attempts: usize,
    pub stop_on_first_mismatch: bool,
    pub max_rounds: usize,
    pub answer_grammar: String,
}

impl Default for FileDuelConfig {
    fn default() -> Self {
        let params = DuelParams::default();
        Self {
            validation_attempts: params.validation.attempts,
            stop_on_first_mismatch: params.validation.stop_on_first_mismatch,
            max_rounds: params.max_rounds,
            answer_grammar: params.grammar.to_string(),
        }
    }
}

impl FileDuelConfig {
    /// Parse the grammar name, falling back to the default with a warning.
    pub fn parse_grammar(&self) -> (AnswerGrammar, Vec<ConfigIssue>) {
        match self.answer_grammar.parse::<AnswerGrammar>() {
            Ok(grammar) => (grammar, vec![]),
            Err(_) => {
                let issue = ConfigIssue {
                    severity: Severity::Warning,
                    code: ConfigIssueCode::InvalidEnumValue {
                        field: "duel.answer_grammar".to_string(),
                        value: self.answer_grammar.clone(),
                        valid_values: vec![
                            "bracketed".to_string(),
                            "lenient".to_string(),
                            "plain".to_string(),
                        ],
                    },
                    message: format!(
                        "duel.answer_grammar: unknown value '{}', falling back to '{}'",
                        self.answer_grammar,
                        AnswerGrammar::default()
                    ),
                };
                (AnswerGrammar::default(), vec![issue])
            }
        }
    }

    /// Convert to [`DuelParams`], reporting counters that are zero.
    pub fn to_params(&self) -> (DuelParams, Vec<ConfigIssue>) {
        let (grammar, mut issues) = self.parse_grammar();

        for (field, value) in [
            ("duel.validation_attempts", self.validation_attempts),
            ("duel.max_rounds", self.max_rounds),
        ] {
            if value == 0 {
                issues.push(ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::ZeroCount {
                        field: field.to_string(),
                    },
                    message: format!("{}: must be at least 1", field),
                });
            }
        }

        let params = DuelParams {
            max_rounds: self.max_rounds,
            grammar,
            validation: ValidationParams {
                attempts: self.validation_attempts,
                stop_on_first_mismatch: self.stop_on_first_mismatch,
            },
        };
        (params, issues)
    }
}
