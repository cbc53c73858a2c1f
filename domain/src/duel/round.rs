//! Duel rounds and history

use crate::core::question::Question;
use crate::duel::report::ValidationReport;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a round did not produce a validated question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RoundFailure {
    /// The generator reply did not follow the extraction grammar
    Extraction(String),
    /// The solver did not reproduce the expected answer
    Inconsistent,
}

impl std::fmt::Display for RoundFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundFailure::Extraction(reason) => write!(f, "unparseable question: {}", reason),
            RoundFailure::Inconsistent => write!(f, "answer was not reproduced consistently"),
        }
    }
}

/// One generate → validate cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelRound {
    /// 1-based round number
    pub round: usize,
    pub started_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification_pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ValidationReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<RoundFailure>,
}

impl DuelRound {
    /// Round whose generator reply could not be parsed
    pub fn unparseable(round: usize, started_at: DateTime<Utc>, reason: impl Into<String>) -> Self {
        Self {
            round,
            started_at,
            question: None,
            verification_pattern: None,
            report: None,
            failure: Some(RoundFailure::Extraction(reason.into())),
        }
    }

    /// Round that reached validation
    pub fn validated(
        round: usize,
        started_at: DateTime<Utc>,
        question: Question,
        verification_pattern: Option<String>,
        report: ValidationReport,
    ) -> Self {
        let failure = (!report.consistent).then_some(RoundFailure::Inconsistent);
        Self {
            round,
            started_at,
            question: Some(question),
            verification_pattern,
            report: Some(report),
            failure,
        }
    }

    pub fn is_success(&self) -> bool {
        self.failure.is_none() && self.report.as_ref().is_some_and(|r| r.consistent)
    }
}

/// Rounds in the order they were played. Display only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DuelHistory {
    rounds: Vec<DuelRound>,
}

impl DuelHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, round: DuelRound) {
        self.rounds.push(round);
    }

    pub fn rounds(&self) -> &[DuelRound] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duel::report::AttemptOutcome;

    fn report(consistent: bool) -> ValidationReport {
        ValidationReport::new("4", 1, vec![AttemptOutcome::answered(1, "4", consistent)])
    }

    #[test]
    fn test_validated_round_success() {
        let round = DuelRound::validated(
            1,
            Utc::now(),
            Question::new("2+2?").with_answer("4"),
            None,
            report(true),
        );
        assert!(round.is_success());
        assert!(round.failure.is_none());
    }

    #[test]
    fn test_inconsistent_round_records_failure() {
        let round = DuelRound::validated(
            2,
            Utc::now(),
            Question::new("2+2?").with_answer("4"),
            None,
            report(false),
        );
        assert!(!round.is_success());
        assert_eq!(round.failure, Some(RoundFailure::Inconsistent));
    }

    #[test]
    fn test_unparseable_round() {
        let round = DuelRound::unparseable(1, Utc::now(), "reply has no 'Answer:' marker");
        assert!(!round.is_success());
        assert_eq!(
            round.failure.as_ref().map(|f| f.to_string()),
            Some("unparseable question: reply has no 'Answer:' marker".to_string())
        );
    }

    #[test]
    fn test_history_appends_in_order() {
        let mut history = DuelHistory::new();
        history.push(DuelRound::unparseable(1, Utc::now(), "x"));
        history.push(DuelRound::unparseable(2, Utc::now(), "y"));
        let numbers: Vec<_> = history.rounds().iter().map(|r| r.round).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
