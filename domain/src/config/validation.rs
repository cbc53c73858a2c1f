//! Structured configuration issues.
//!
//! Configuration loaders report problems as [`ConfigIssue`] values instead of
//! failing on the first one, so the binary can print every issue at once and
//! decide which are fatal.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A model name is present but blank.
    EmptyModelName { field: String },
    /// A counter that must be at least one is zero.
    ZeroCount { field: String },
    /// A string field does not name a known variant.
    InvalidEnumValue {
        field: String,
        value: String,
        valid_values: Vec<String>,
    },
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_error() {
        let issue = ConfigIssue {
            severity: Severity::Warning,
            code: ConfigIssueCode::ZeroCount {
                field: "duel.max_rounds".to_string(),
            },
            message: "duel.max_rounds must be at least 1".to_string(),
        };
        assert!(!issue.is_error());
    }
}
