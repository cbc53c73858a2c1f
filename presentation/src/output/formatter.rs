//! Output formatter trait

use duel_domain::DuelOutcome;

/// Trait for formatting duel outcomes
pub trait OutputFormatter {
    /// Format the complete outcome, round by round
    fn format(&self, outcome: &DuelOutcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &DuelOutcome) -> String;

    /// Format the validated question only (concise output)
    fn format_question_only(&self, outcome: &DuelOutcome) -> String;
}
