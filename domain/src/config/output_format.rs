//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for duel results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every round with its validation attempts (default)
    #[default]
    Full,
    /// Only the validated question and answer
    Question,
    /// JSON output
    Json,
}
