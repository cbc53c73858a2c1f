//! Prompt domain
//!
//! Templates for the generator and solver sides of a duel.

mod template;

pub use template::DuelPromptTemplate;
