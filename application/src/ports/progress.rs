//! Progress notification port
//!
//! Defines the interface for reporting progress while a duel runs.

use duel_domain::{AttemptOutcome, DuelRound, ExtractionError, Question};

/// Callback for progress updates during a duel
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain text, nothing).
pub trait DuelProgressNotifier: Send + Sync {
    /// Called before the generator is prompted
    fn on_round_start(&self, round: usize, max_rounds: usize);

    /// Called when the generator reply parsed into a question
    fn on_question_generated(&self, _round: usize, _question: &Question) {}

    /// Called when the generator reply did not follow the grammar
    fn on_generation_failed(&self, _round: usize, _error: &ExtractionError) {}

    /// Called before the first solver attempt
    fn on_validation_start(&self, _attempts: usize) {}

    /// Called after each solver attempt
    fn on_attempt_complete(&self, outcome: &AttemptOutcome);

    /// Called when the round has been recorded in the history
    fn on_round_complete(&self, round: &DuelRound);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DuelProgressNotifier for NoProgress {
    fn on_round_start(&self, _round: usize, _max_rounds: usize) {}
    fn on_attempt_complete(&self, _outcome: &AttemptOutcome) {}
    fn on_round_complete(&self, _round: &DuelRound) {}
}
