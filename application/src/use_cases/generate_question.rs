//! Generate Question use case
//!
//! Prompts the generator with the duel template and parses its reply.

use crate::ports::completion_client::{CompletionClient, TransportError};
use duel_domain::{AnswerGrammar, DuelPromptTemplate, Extraction, ExtractionError, extract_question, preview};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while generating a question
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractionError),
}

/// Use case for asking the generator for one question
pub struct GenerateQuestionUseCase {
    generator: Arc<dyn CompletionClient>,
}

impl GenerateQuestionUseCase {
    pub fn new(generator: Arc<dyn CompletionClient>) -> Self {
        Self { generator }
    }

    pub async fn execute(&self, grammar: AnswerGrammar) -> Result<Extraction, GenerateError> {
        let prompt = DuelPromptTemplate::generation(grammar);
        info!("Requesting a question from {}", self.generator.model());

        let reply = self.generator.send(&prompt).await?;
        debug!("Generator reply: {}", preview(&reply, 200));

        let extraction = extract_question(&reply, grammar)?;
        info!(
            "Generated question with expected answer '{}'",
            extraction.question.answer().unwrap_or_default()
        );
        Ok(extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::MockClient;

    #[tokio::test]
    async fn test_generates_question_from_reply() {
        let client = Arc::new(MockClient::new(vec![
            "Question: What is 2+2? Answer: [4]\nRegex: (?i)\\[4\\]",
        ]));
        let use_case = GenerateQuestionUseCase::new(client.clone());

        let extraction = use_case.execute(AnswerGrammar::Lenient).await.unwrap();

        assert_eq!(extraction.question.text(), "What is 2+2?");
        assert_eq!(extraction.question.answer(), Some("4"));
        assert_eq!(extraction.verification_pattern.as_deref(), Some("(?i)\\[4\\]"));
        assert_eq!(
            client.prompts(),
            vec![DuelPromptTemplate::generation(AnswerGrammar::Lenient)]
        );
    }

    #[tokio::test]
    async fn test_reply_without_answer_is_extraction_error() {
        let client = Arc::new(MockClient::new(vec!["Question: What is 2+2?"]));
        let use_case = GenerateQuestionUseCase::new(client);

        let err = use_case.execute(AnswerGrammar::Lenient).await.unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Extraction(ExtractionError::MissingAnswerMarker)
        ));
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let client = Arc::new(MockClient::with_results(vec![Err(
            TransportError::Connection("refused".to_string()),
        )]));
        let use_case = GenerateQuestionUseCase::new(client);

        let err = use_case.execute(AnswerGrammar::Lenient).await.unwrap_err();
        assert!(matches!(err, GenerateError::Transport(TransportError::Connection(_))));
    }
}
