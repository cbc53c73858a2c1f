//! `Question: ... Answer: ...` reply parser

use super::{AnswerGrammar, ExtractionError};
use crate::core::question::Question;
use serde::{Deserialize, Serialize};

const QUESTION_MARKER: &str = "Question:";
const ANSWER_MARKER: &str = "Answer:";
const REGEX_MARKER: &str = "Regex:";

/// Result of parsing a generator reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// The question, always with an expected answer
    pub question: Question,
    /// Verification regex offered by the generator, uncompiled
    pub verification_pattern: Option<String>,
}

/// Parse a generator reply into a question with its expected answer.
///
/// The question text runs from the first `Question:` marker to the answer
/// marker. The answer marker is the first `Answer:` that starts a line after
/// the question; when no line starts with it, the first inline occurrence is
/// used instead. Question text that quotes the answer format on the same line
/// as the question therefore stays intact as long as the real answer sits on
/// its own line.
///
/// No partial result is ever returned: both spans must be non-empty.
///
/// # Examples
///
/// ```
/// use duel_domain::extraction::{AnswerGrammar, extract_question};
///
/// let parsed = extract_question("Question: What is 2+2? Answer: [4]", AnswerGrammar::Lenient).unwrap();
/// assert_eq!(parsed.question.text(), "What is 2+2?");
/// assert_eq!(parsed.question.answer(), Some("4"));
/// ```
pub fn extract_question(
    reply: &str,
    grammar: AnswerGrammar,
) -> Result<Extraction, ExtractionError> {
    let question_start = reply
        .find(QUESTION_MARKER)
        .ok_or(ExtractionError::MissingQuestionMarker)?;
    let after_question = &reply[question_start + QUESTION_MARKER.len()..];

    let answer_start =
        find_answer_marker(after_question).ok_or(ExtractionError::MissingAnswerMarker)?;

    let text = after_question[..answer_start].trim();
    let question = Question::try_new(text).ok_or(ExtractionError::EmptyQuestion)?;

    let answer = answer_span(&after_question[answer_start + ANSWER_MARKER.len()..], grammar)?;

    Ok(Extraction {
        question: question.with_answer(answer),
        verification_pattern: extract_verification_pattern(reply),
    })
}

/// Pull the answer out of a solver reply using the same rule as
/// [`extract_question`].
pub fn extract_answer(reply: &str, grammar: AnswerGrammar) -> Result<String, ExtractionError> {
    let start = find_answer_marker(reply).ok_or(ExtractionError::MissingAnswerMarker)?;
    answer_span(&reply[start + ANSWER_MARKER.len()..], grammar)
}

/// Find a `Regex:` line and return its pattern with surrounding backticks removed.
pub fn extract_verification_pattern(reply: &str) -> Option<String> {
    reply.lines().find_map(|line| {
        let pattern = line
            .trim_start()
            .strip_prefix(REGEX_MARKER)?
            .trim()
            .trim_matches('`')
            .trim();
        (!pattern.is_empty()).then(|| pattern.to_string())
    })
}

/// Case-insensitive exact comparison of two answers, ignoring outer whitespace.
pub fn answers_match(expected: &str, observed: &str) -> bool {
    expected.trim().to_lowercase() == observed.trim().to_lowercase()
}

/// Byte offset of the answer marker, preferring one that starts a line.
fn find_answer_marker(text: &str) -> Option<usize> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        let stripped = line.trim_start();
        if stripped.starts_with(ANSWER_MARKER) {
            return Some(offset + (line.len() - stripped.len()));
        }
        offset += line.len();
    }
    text.find(ANSWER_MARKER)
}

fn answer_span(after_marker: &str, grammar: AnswerGrammar) -> Result<String, ExtractionError> {
    let line = after_marker.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return Err(ExtractionError::EmptyAnswer);
    }

    let answer = match grammar {
        AnswerGrammar::Plain => line,
        AnswerGrammar::Bracketed => line
            .strip_prefix('[')
            .and_then(|rest| rest.find(']').map(|end| &rest[..end]))
            .ok_or_else(|| ExtractionError::UnbracketedAnswer(line.to_string()))?,
        AnswerGrammar::Lenient => {
            let body = line.strip_prefix('[').unwrap_or(line);
            let end = body.find(']').unwrap_or(body.len());
            body[..end].trim_matches(|c: char| c == '[' || c == ']' || c.is_whitespace())
        }
    }
    .trim();

    if answer.is_empty() {
        Err(ExtractionError::EmptyAnswer)
    } else {
        Ok(answer.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lenient(reply: &str) -> Result<Extraction, ExtractionError> {
        extract_question(reply, AnswerGrammar::Lenient)
    }

    // ==================== extract_question ====================

    #[test]
    fn test_two_line_bracketed_reply() {
        let parsed = lenient("Question: Q\nAnswer: [A]").unwrap();
        assert_eq!(parsed.question.text(), "Q");
        assert_eq!(parsed.question.answer(), Some("A"));
        assert!(parsed.verification_pattern.is_none());
    }

    #[test]
    fn test_single_line_reply() {
        let parsed = lenient("Question: What is 2+2? Answer: [4]").unwrap();
        assert_eq!(parsed.question.text(), "What is 2+2?");
        assert_eq!(parsed.question.answer(), Some("4"));
    }

    #[test]
    fn test_surrounding_chatter_is_ignored() {
        let reply = "Sure! Here is my challenge.\n\nQuestion:   Which element has the symbol Fe?  \nAnswer:  [ Iron ]  \n\nGood luck.";
        let parsed = lenient(reply).unwrap();
        assert_eq!(parsed.question.text(), "Which element has the symbol Fe?");
        assert_eq!(parsed.question.answer(), Some("Iron"));
    }

    #[test]
    fn test_format_instructions_inside_question_are_kept() {
        let reply = "Question: How many legs does a spider have? Reply as 'Answer: [NUMBER]'.\nAnswer: [8]\nRegex: (?i)answer:\\s*\\[\\s*8\\s*\\]";
        let parsed = lenient(reply).unwrap();
        assert_eq!(
            parsed.question.text(),
            "How many legs does a spider have? Reply as 'Answer: [NUMBER]'."
        );
        assert_eq!(parsed.question.answer(), Some("8"));
        assert_eq!(
            parsed.verification_pattern.as_deref(),
            Some("(?i)answer:\\s*\\[\\s*8\\s*\\]")
        );
    }

    #[test]
    fn test_multiline_question_text() {
        let reply = "Question: Consider the sequence\n2, 4, 8, 16.\nWhat comes next?\nAnswer: [32]";
        let parsed = lenient(reply).unwrap();
        assert_eq!(
            parsed.question.text(),
            "Consider the sequence\n2, 4, 8, 16.\nWhat comes next?"
        );
        assert_eq!(parsed.question.answer(), Some("32"));
    }

    #[test]
    fn test_first_question_marker_wins() {
        let parsed = lenient("Question: first\nAnswer: [1]\nQuestion: second\nAnswer: [2]").unwrap();
        assert_eq!(parsed.question.text(), "first");
        assert_eq!(parsed.question.answer(), Some("1"));
    }

    #[test]
    fn test_missing_question_marker() {
        assert_eq!(
            lenient("Answer: [4]").unwrap_err(),
            ExtractionError::MissingQuestionMarker
        );
        assert_eq!(
            lenient("question: lowercase marker\nAnswer: [x]").unwrap_err(),
            ExtractionError::MissingQuestionMarker
        );
    }

    #[test]
    fn test_missing_answer_marker() {
        assert_eq!(
            lenient("Question: What is 2+2?").unwrap_err(),
            ExtractionError::MissingAnswerMarker
        );
    }

    #[test]
    fn test_answer_before_question_is_rejected() {
        assert_eq!(
            lenient("Answer: [4]\nQuestion: What is 2+2?").unwrap_err(),
            ExtractionError::MissingAnswerMarker
        );
    }

    #[test]
    fn test_empty_spans_are_rejected() {
        assert_eq!(
            lenient("Question:\nAnswer: [4]").unwrap_err(),
            ExtractionError::EmptyQuestion
        );
        assert_eq!(
            lenient("Question: Q\nAnswer: []").unwrap_err(),
            ExtractionError::EmptyAnswer
        );
        assert_eq!(
            lenient("Question: Q\nAnswer:").unwrap_err(),
            ExtractionError::EmptyAnswer
        );
    }

    // ==================== grammars ====================

    #[test]
    fn test_bracketed_grammar_rejects_bare_answer() {
        let err = extract_question("Question: Q\nAnswer: Paris", AnswerGrammar::Bracketed)
            .unwrap_err();
        assert_eq!(err, ExtractionError::UnbracketedAnswer("Paris".to_string()));

        let ok = extract_question("Question: Q\nAnswer: [Paris].", AnswerGrammar::Bracketed)
            .unwrap();
        assert_eq!(ok.question.answer(), Some("Paris"));
    }

    #[test]
    fn test_lenient_grammar_accepts_both_forms() {
        assert_eq!(extract_answer("Answer: au", AnswerGrammar::Lenient).unwrap(), "au");
        assert_eq!(extract_answer("Answer: [au]", AnswerGrammar::Lenient).unwrap(), "au");
        assert_eq!(extract_answer("Answer: Paris]", AnswerGrammar::Lenient).unwrap(), "Paris");
        assert_eq!(
            extract_answer("Answer: [New York", AnswerGrammar::Lenient).unwrap(),
            "New York"
        );
    }

    #[test]
    fn test_plain_grammar_keeps_line_verbatim() {
        assert_eq!(
            extract_answer("Answer:  [4] apples \nthanks", AnswerGrammar::Plain).unwrap(),
            "[4] apples"
        );
    }

    // ==================== extract_answer ====================

    #[test]
    fn test_solver_reply_with_reasoning() {
        let reply = "Gold comes from the Latin aurum.\nSo the symbol is Au.\n\nAnswer: [Au]";
        assert_eq!(extract_answer(reply, AnswerGrammar::Lenient).unwrap(), "Au");
    }

    #[test]
    fn test_solver_reply_without_marker() {
        assert_eq!(
            extract_answer("I think it is Au.", AnswerGrammar::Lenient).unwrap_err(),
            ExtractionError::MissingAnswerMarker
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = lenient("Question: Q\r\nAnswer: [A]\r\n").unwrap();
        assert_eq!(parsed.question.text(), "Q");
        assert_eq!(parsed.question.answer(), Some("A"));
    }

    // ==================== verification pattern ====================

    #[test]
    fn test_verification_pattern_strips_backticks() {
        let reply = "Question: Q\nAnswer: [A]\nRegex: `(?i)\\[\\s*a\\s*\\]`";
        assert_eq!(
            extract_verification_pattern(reply).as_deref(),
            Some("(?i)\\[\\s*a\\s*\\]")
        );
        assert!(extract_verification_pattern("Regex:   ").is_none());
    }

    // ==================== answers_match ====================

    #[test]
    fn test_answers_match_is_case_insensitive() {
        assert!(answers_match("Paris", "paris"));
        assert!(answers_match("Au", " AU "));
        assert!(!answers_match("Paris", "Lyon"));
        assert!(!answers_match("4", "four"));
    }
}
