//! Run Duel use case
//!
//! Repeats generate → validate until a question validates or the round
//! ceiling is reached. An unparseable generator reply costs one round; a
//! transport failure aborts the run.

use crate::config::DuelParams;
use crate::ports::completion_client::{CompletionClient, TransportError};
use crate::ports::progress::{DuelProgressNotifier, NoProgress};
use crate::use_cases::generate_question::{GenerateError, GenerateQuestionUseCase};
use crate::use_cases::validate_question::{
    ValidateError, ValidateQuestionInput, ValidateQuestionUseCase,
};
use chrono::Utc;
use duel_domain::{DuelHistory, DuelOutcome, DuelRound, Question};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that abort a duel
#[derive(Error, Debug)]
pub enum RunDuelError {
    #[error("Duel needs at least one round")]
    NoRounds,

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Validation error: {0}")]
    Validation(ValidateError),
}

impl From<ValidateError> for RunDuelError {
    fn from(e: ValidateError) -> Self {
        match e {
            ValidateError::Transport(t) => RunDuelError::Transport(t),
            other => RunDuelError::Validation(other),
        }
    }
}

/// Use case for running a full duel
pub struct RunDuelUseCase {
    generator: Arc<dyn CompletionClient>,
    solver: Arc<dyn CompletionClient>,
}

impl RunDuelUseCase {
    /// `generator` writes questions, `solver` answers them. Pass the same
    /// client twice for a self-duel.
    pub fn new(generator: Arc<dyn CompletionClient>, solver: Arc<dyn CompletionClient>) -> Self {
        Self { generator, solver }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, params: DuelParams) -> Result<DuelOutcome, RunDuelError> {
        self.execute_with_progress(params, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        params: DuelParams,
        progress: &dyn DuelProgressNotifier,
    ) -> Result<DuelOutcome, RunDuelError> {
        if params.max_rounds == 0 {
            return Err(RunDuelError::NoRounds);
        }
        if params.validation.attempts == 0 {
            return Err(RunDuelError::Validation(ValidateError::NoAttempts));
        }

        info!(
            "Starting duel: {} generates, {} solves, up to {} rounds",
            self.generator.model(),
            self.solver.model(),
            params.max_rounds
        );

        let generate = GenerateQuestionUseCase::new(Arc::clone(&self.generator));
        let validate = ValidateQuestionUseCase::new(Arc::clone(&self.solver));
        let mut history = DuelHistory::new();

        for round in 1..=params.max_rounds {
            progress.on_round_start(round, params.max_rounds);
            let started_at = Utc::now();

            let extraction = match generate.execute(params.grammar).await {
                Ok(extraction) => extraction,
                Err(GenerateError::Extraction(e)) => {
                    warn!("Round {}: generator reply rejected: {}", round, e);
                    progress.on_generation_failed(round, &e);
                    let record = DuelRound::unparseable(round, started_at, e.to_string());
                    progress.on_round_complete(&record);
                    history.push(record);
                    continue;
                }
                Err(GenerateError::Transport(e)) => return Err(e.into()),
            };
            progress.on_question_generated(round, &extraction.question);

            let input = ValidateQuestionInput::new(extraction.question.clone())
                .with_params(params.validation)
                .with_grammar(params.grammar)
                .with_verification_pattern(extraction.verification_pattern.clone());
            let report = validate.execute_with_progress(input, progress).await?;

            let record = DuelRound::validated(
                round,
                started_at,
                extraction.question,
                extraction.verification_pattern,
                report,
            );
            progress.on_round_complete(&record);
            let accepted = record.is_success().then(|| record.question.clone()).flatten();
            history.push(record);

            if let Some(question) = accepted {
                info!("Round {}: question validated", round);
                return Ok(self.outcome(Some(question), history));
            }
            warn!("Round {}: question failed validation", round);
        }

        info!("No question validated after {} rounds", params.max_rounds);
        Ok(self.outcome(None, history))
    }

    fn outcome(&self, validated: Option<Question>, history: DuelHistory) -> DuelOutcome {
        DuelOutcome {
            generator: self.generator.model().clone(),
            solver: self.solver.model().clone(),
            validated,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ValidationParams;
    use crate::use_cases::test_support::MockClient;
    use duel_domain::RoundFailure;

    fn params(rounds: usize, attempts: usize) -> DuelParams {
        DuelParams::default()
            .with_max_rounds(rounds)
            .with_validation(ValidationParams::default().with_attempts(attempts))
    }

    #[tokio::test]
    async fn test_first_round_validates() {
        let generator = Arc::new(MockClient::new(vec!["Question: What is 2+2? Answer: [4]"]));
        let solver = Arc::new(MockClient::repeat("Answer: [4]", 3));
        let use_case = RunDuelUseCase::new(generator.clone(), solver.clone());

        let outcome = use_case.execute(params(3, 3)).await.unwrap();

        let question = outcome.validated.as_ref().unwrap();
        assert_eq!(question.text(), "What is 2+2?");
        assert_eq!(question.answer(), Some("4"));
        assert_eq!(outcome.rounds_played(), 1);
        assert_eq!(generator.calls(), 1);
        assert_eq!(solver.calls(), 3);
    }

    #[tokio::test]
    async fn test_unparseable_reply_retries_up_to_ceiling() {
        let generator = Arc::new(MockClient::repeat("Question: What is 2+2? It is four.", 3));
        let solver = Arc::new(MockClient::new(vec![]));
        let use_case = RunDuelUseCase::new(generator.clone(), solver.clone());

        let outcome = use_case.execute(params(3, 5)).await.unwrap();

        assert!(!outcome.is_success());
        assert_eq!(generator.calls(), 3);
        assert_eq!(solver.calls(), 0);
        assert_eq!(outcome.rounds_played(), 3);
        assert!(outcome
            .history
            .rounds()
            .iter()
            .all(|r| matches!(r.failure, Some(RoundFailure::Extraction(_)))));
    }

    #[tokio::test]
    async fn test_inconsistent_round_then_success() {
        let generator = Arc::new(MockClient::new(vec![
            "Question: Hardest riddle?\nAnswer: [echo]",
            "Question: Symbol for gold?\nAnswer: [Au]",
        ]));
        let solver = Arc::new(MockClient::new(vec![
            "Answer: [shadow]",
            "Answer: au",
            "Answer: AU",
        ]));
        let use_case = RunDuelUseCase::new(generator.clone(), solver.clone());

        let outcome = use_case.execute(params(3, 2)).await.unwrap();

        assert_eq!(
            outcome.validated.as_ref().and_then(|q| q.answer()),
            Some("Au")
        );
        let rounds = outcome.history.rounds();
        assert_eq!(rounds.len(), 2);
        assert_eq!(rounds[0].failure, Some(RoundFailure::Inconsistent));
        assert!(rounds[1].is_success());
        assert_eq!(generator.calls(), 2);
        assert_eq!(solver.calls(), 3);
    }

    #[tokio::test]
    async fn test_transport_error_aborts_run() {
        let generator = Arc::new(MockClient::with_results(vec![Err(
            TransportError::Connection("dns".to_string()),
        )]));
        let solver = Arc::new(MockClient::new(vec![]));
        let use_case = RunDuelUseCase::new(generator.clone(), solver);

        let err = use_case.execute(params(3, 5)).await.unwrap_err();

        assert!(matches!(err, RunDuelError::Transport(TransportError::Connection(_))));
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_solver_transport_error_aborts_run() {
        let generator = Arc::new(MockClient::new(vec!["Question: Q\nAnswer: [A]"]));
        let solver = Arc::new(MockClient::new(vec!["Answer: [A]"]));
        let use_case = RunDuelUseCase::new(generator, solver);

        // Second solver call finds no scripted reply left
        let err = use_case.execute(params(3, 2)).await.unwrap_err();
        assert!(matches!(err, RunDuelError::Transport(TransportError::Exhausted)));
    }

    #[tokio::test]
    async fn test_zero_rounds_or_attempts_rejected() {
        let use_case = RunDuelUseCase::new(
            Arc::new(MockClient::new(vec![])),
            Arc::new(MockClient::new(vec![])),
        );
        assert!(matches!(
            use_case.execute(params(0, 5)).await.unwrap_err(),
            RunDuelError::NoRounds
        ));
        assert!(matches!(
            use_case.execute(params(1, 0)).await.unwrap_err(),
            RunDuelError::Validation(ValidateError::NoAttempts)
        ));
    }
}
