//! Validate Question use case
//!
//! Re-asks a generated question and checks that the solver reproduces the
//! expected answer every time.
//!
//! The question text is sent verbatim, once per attempt, each call awaited
//! before the next. A reply without a parseable answer counts as a mismatch.

use crate::config::ValidationParams;
use crate::ports::completion_client::{CompletionClient, TransportError};
use crate::ports::progress::{DuelProgressNotifier, NoProgress};
use duel_domain::{
    AnswerGrammar, AttemptOutcome, Question, ValidationReport, answers_match, extract_answer,
    preview,
};
use regex::{Regex, RegexBuilder};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during validation
#[derive(Error, Debug)]
pub enum ValidateError {
    #[error("Question has no expected answer")]
    MissingAnswer,

    #[error("Validation needs at least one attempt")]
    NoAttempts,

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Input for the ValidateQuestion use case
#[derive(Debug, Clone)]
pub struct ValidateQuestionInput {
    /// Question with its expected answer
    pub question: Question,
    /// Optional generator-supplied regex, checked against each raw reply
    pub verification_pattern: Option<String>,
    pub params: ValidationParams,
    pub grammar: AnswerGrammar,
}

impl ValidateQuestionInput {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            verification_pattern: None,
            params: ValidationParams::default(),
            grammar: AnswerGrammar::default(),
        }
    }

    pub fn with_params(mut self, params: ValidationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_grammar(mut self, grammar: AnswerGrammar) -> Self {
        self.grammar = grammar;
        self
    }

    pub fn with_verification_pattern(mut self, pattern: Option<String>) -> Self {
        self.verification_pattern = pattern;
        self
    }
}

/// Use case for checking that a question has one reproducible answer
pub struct ValidateQuestionUseCase {
    solver: Arc<dyn CompletionClient>,
}

impl ValidateQuestionUseCase {
    pub fn new(solver: Arc<dyn CompletionClient>) -> Self {
        Self { solver }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: ValidateQuestionInput,
    ) -> Result<ValidationReport, ValidateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: ValidateQuestionInput,
        progress: &dyn DuelProgressNotifier,
    ) -> Result<ValidationReport, ValidateError> {
        let expected = input
            .question
            .answer()
            .ok_or(ValidateError::MissingAnswer)?
            .to_string();
        let attempts = input.params.attempts;
        if attempts == 0 {
            return Err(ValidateError::NoAttempts);
        }

        let pattern = input
            .verification_pattern
            .as_deref()
            .and_then(compile_verification_pattern);

        info!(
            "Validating question with {} ({} attempts, expected '{}')",
            self.solver.model(),
            attempts,
            expected
        );
        progress.on_validation_start(attempts);

        let mut outcomes = Vec::with_capacity(attempts);
        for attempt in 1..=attempts {
            let reply = self.solver.send(input.question.text()).await?;

            let outcome = match extract_answer(&reply, input.grammar) {
                Ok(answer) => {
                    let matched = answers_match(&expected, &answer);
                    AttemptOutcome::answered(attempt, answer, matched)
                }
                Err(e) => {
                    debug!(
                        "Attempt {}: no answer in reply ({}): {}",
                        attempt,
                        e,
                        preview(&reply, 120)
                    );
                    AttemptOutcome::unparseable(attempt)
                }
            }
            .with_pattern_matched(pattern.as_ref().map(|re| re.is_match(&reply)));

            debug!(
                "Attempt {}/{}: {:?} (matched: {})",
                attempt, attempts, outcome.answer, outcome.matched
            );
            progress.on_attempt_complete(&outcome);

            let mismatch = !outcome.matched;
            outcomes.push(outcome);

            if mismatch && input.params.stop_on_first_mismatch {
                info!("Stopping after mismatch on attempt {}", attempt);
                break;
            }
        }

        let report = ValidationReport::new(expected, attempts, outcomes);
        info!(
            "Validation finished: {}/{} correct, consistent: {}",
            report.correct_count(),
            attempts,
            report.consistent
        );
        Ok(report)
    }
}

/// Compile a generator-supplied regex, case-insensitively.
///
/// Models often wrap the pattern in the template's brackets; when the raw
/// pattern does not compile, the bracket-stripped form is tried.
fn compile_verification_pattern(raw: &str) -> Option<Regex> {
    let build = |p: &str| RegexBuilder::new(p).case_insensitive(true).build();
    match build(raw) {
        Ok(re) => Some(re),
        Err(e) => {
            let inner = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']'));
            if let Some(Ok(re)) = inner.map(build) {
                return Some(re);
            }
            warn!("Ignoring invalid verification pattern '{}': {}", raw, e);
            None
        }
    }
}
