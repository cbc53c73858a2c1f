//! Reply extraction for duel questions and answers.
//!
//! These functions pull a [`Question`](crate::Question) and its answer out of
//! free-form model replies. They are pure domain logic: no I/O, just text
//! pattern matching.
//!
//! # Functions
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`extract_question`] | Generator reply | Question + expected answer + optional regex |
//! | [`extract_answer`] | Solver reply | Answer string |
//! | [`extract_verification_pattern`] | Generator reply | Raw `Regex:` line |
//! | [`answers_match`] | Two answers | Case-insensitive equality |

mod grammar;
mod parser;

pub use grammar::AnswerGrammar;
pub use parser::{
    Extraction, answers_match, extract_answer, extract_question, extract_verification_pattern,
};

use thiserror::Error;

/// Reasons a reply does not follow the extraction grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("reply has no 'Question:' marker")]
    MissingQuestionMarker,

    #[error("reply has no 'Answer:' marker after the question")]
    MissingAnswerMarker,

    #[error("question text is empty")]
    EmptyQuestion,

    #[error("answer is empty")]
    EmptyAnswer,

    #[error("answer is not enclosed in brackets: {0}")]
    UnbracketedAnswer(String),
}
