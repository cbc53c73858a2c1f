//! Answer grammar value object

use serde::{Deserialize, Serialize};

/// How the span after `Answer:` is interpreted.
///
/// Prompt templates ask for the [`AnswerGrammar::Bracketed`] form. Older
/// templates asked for an unbracketed answer, and models do not always follow
/// instructions, so the parser defaults to [`AnswerGrammar::Lenient`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerGrammar {
    /// `Answer: [ANSWER]` only; an unbracketed answer is rejected
    Bracketed,
    /// Up to end of line or the first `]`, enclosing brackets optional
    #[default]
    Lenient,
    /// The rest of the line, verbatim
    Plain,
}

impl AnswerGrammar {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerGrammar::Bracketed => "bracketed",
            AnswerGrammar::Lenient => "lenient",
            AnswerGrammar::Plain => "plain",
        }
    }

    /// Whether prompts built for this grammar should ask for brackets
    pub fn expects_brackets(&self) -> bool {
        !matches!(self, AnswerGrammar::Plain)
    }
}

impl std::fmt::Display for AnswerGrammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AnswerGrammar {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bracketed" | "strict" => Ok(AnswerGrammar::Bracketed),
            "lenient" => Ok(AnswerGrammar::Lenient),
            "plain" | "legacy" => Ok(AnswerGrammar::Plain),
            other => Err(format!(
                "unknown answer grammar '{}' (expected bracketed, lenient or plain)",
                other
            )),
        }
    }
}
