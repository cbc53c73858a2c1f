//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_question;
pub mod run_duel;
pub mod validate_question;

#[cfg(test)]
pub(crate) mod test_support;
