//! Validation report value objects

use serde::{Deserialize, Serialize};

/// One solver attempt at a question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptOutcome {
    /// 1-based attempt number
    pub attempt: usize,
    /// Extracted answer, `None` when the reply had no parseable answer
    pub answer: Option<String>,
    /// Whether the answer matched the expected one
    pub matched: bool,
    /// Whether the generator's verification regex accepted the raw reply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_matched: Option<bool>,
}

impl AttemptOutcome {
    /// Creates an outcome for a reply whose answer was extracted.
    pub fn answered(attempt: usize, answer: impl Into<String>, matched: bool) -> Self {
        Self {
            attempt,
            answer: Some(answer.into()),
            matched,
            pattern_matched: None,
        }
    }

    /// Creates an outcome for a reply that did not follow the answer grammar.
    pub fn unparseable(attempt: usize) -> Self {
        Self {
            attempt,
            answer: None,
            matched: false,
            pattern_matched: None,
        }
    }

    pub fn with_pattern_matched(mut self, matched: Option<bool>) -> Self {
        self.pattern_matched = matched;
        self
    }
}

/// Result of re-asking a question several times
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// The expected answer
    pub expected: String,
    /// Number of attempts the validator was configured for
    pub attempts_configured: usize,
    /// Outcomes in the order the attempts were made
    pub outcomes: Vec<AttemptOutcome>,
    /// True only if every configured attempt was made and matched
    pub consistent: bool,
}

impl ValidationReport {
    /// Builds a report and derives `consistent` from the outcomes.
    pub fn new(
        expected: impl Into<String>,
        attempts_configured: usize,
        outcomes: Vec<AttemptOutcome>,
    ) -> Self {
        let consistent = attempts_configured > 0
            && outcomes.len() == attempts_configured
            && outcomes.iter().all(|o| o.matched);
        Self {
            expected: expected.into(),
            attempts_configured,
            outcomes,
            consistent,
        }
    }

    pub fn correct_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.matched).count()
    }

    pub fn attempts_made(&self) -> usize {
        self.outcomes.len()
    }

    /// Extracted answers in attempt order; unparseable replies are `None`.
    pub fn observed_answers(&self) -> Vec<Option<&str>> {
        self.outcomes.iter().map(|o| o.answer.as_deref()).collect()
    }
}
