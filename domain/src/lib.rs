//! Domain layer for ai-duel
//!
//! This crate contains the entities, value objects and pure text logic of a
//! duel. It performs no I/O.
//!
//! # Core Concepts
//!
//! ## Duel
//!
//! One model (the generator) writes a quiz question with a known answer.
//! Another model (the solver, possibly the same one) answers it several times.
//! A question is accepted when every answer matches the expected one.
//!
//! ## Extraction grammar
//!
//! Replies are plain text in the form `Question: ... Answer: [...]`, parsed by
//! [`extraction`] according to an [`AnswerGrammar`].

pub mod config;
pub mod core;
pub mod duel;
pub mod extraction;
pub mod prompt;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{model::Model, question::Question, string::preview};
pub use duel::{
    outcome::DuelOutcome,
    report::{AttemptOutcome, ValidationReport},
    round::{DuelHistory, DuelRound, RoundFailure},
};
pub use extraction::{
    AnswerGrammar, Extraction, ExtractionError, answers_match, extract_answer, extract_question,
    extract_verification_pattern,
};
pub use prompt::DuelPromptTemplate;
