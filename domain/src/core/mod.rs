//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: model identifiers sent to the completion service
//! - [`question::Question`]: a generated question and its expected answer
//! - [`string::preview`]: single-line previews for logs and progress output

pub mod model;
pub mod question;
pub mod string;
