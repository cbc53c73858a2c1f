//! Question value object

use serde::{Deserialize, Serialize};

/// A duel question (Value Object)
///
/// `text` is the question body as the generator wrote it, including its
/// answer-format instructions. `answer` is the expected answer and is only
/// present once a reply has been parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    answer: Option<String>,
}

impl Question {
    /// Create a question without an expected answer
    ///
    /// # Panics
    /// Panics if the text is empty or only whitespace
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        assert!(!text.trim().is_empty(), "Question cannot be empty");
        Self { text, answer: None }
    }

    /// Try to create a new question, returning None if the text is blank
    pub fn try_new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self { text, answer: None })
        }
    }

    /// Attach the expected answer
    pub fn with_answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = Some(answer.into());
        self
    }

    /// Get the question text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the expected answer, if one was extracted
    pub fn answer(&self) -> Option<&str> {
        self.answer.as_deref()
    }

    pub fn has_answer(&self) -> bool {
        self.answer.is_some()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Question {
    fn from(s: &str) -> Self {
        Question::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_creation() {
        let q = Question::new("What is 2+2?");
        assert_eq!(q.text(), "What is 2+2?");
        assert!(q.answer().is_none());
        assert!(!q.has_answer());
    }

    #[test]
    fn test_with_answer() {
        let q = Question::new("Symbol for gold?").with_answer("Au");
        assert_eq!(q.answer(), Some("Au"));
        assert!(q.has_answer());
    }

    #[test]
    #[should_panic]
    fn test_empty_question_panics() {
        Question::new("");
    }

    #[test]
    fn test_try_new_blank() {
        assert!(Question::try_new("").is_none());
        assert!(Question::try_new("  \n ").is_none());
        assert!(Question::try_new("Why?").is_some());
    }

    #[test]
    fn test_serialize_skips_missing_answer() {
        let json = serde_json::to_string(&Question::new("Q")).unwrap();
        assert_eq!(json, r#"{"text":"Q"}"#);

        let parsed: Question = serde_json::from_str(r#"{"text":"Q","answer":"A"}"#).unwrap();
        assert_eq!(parsed.answer(), Some("A"));
    }
}
