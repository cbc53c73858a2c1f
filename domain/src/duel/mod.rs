//! Duel value objects - result types for generate → validate rounds.
//!
//! - [`report::ValidationReport`] - answers observed while validating one question
//! - [`round::DuelRound`] - one generate → validate cycle
//! - [`outcome::DuelOutcome`] - the complete run with its history

pub mod outcome;
pub mod report;
pub mod round;
