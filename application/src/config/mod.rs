//! Application-level configuration.
//!
//! - [`ValidationParams`]: how many times a question is re-asked, and whether to stop early
//! - [`DuelParams`]: the round ceiling and answer grammar for a whole duel

pub mod duel_params;

pub use duel_params::{DuelParams, ValidationParams};
