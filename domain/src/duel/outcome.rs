//! Complete duel outcome

use crate::core::{model::Model, question::Question};
use crate::duel::round::DuelHistory;
use serde::{Deserialize, Serialize};

/// Result of a full duel run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DuelOutcome {
    pub generator: Model,
    pub solver: Model,
    /// First question that validated, if any
    pub validated: Option<Question>,
    pub history: DuelHistory,
}

impl DuelOutcome {
    pub fn is_success(&self) -> bool {
        self.validated.is_some()
    }

    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }
}
