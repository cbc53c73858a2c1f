//! Scripted completion client
//!
//! Replays a fixed list of replies in order, one per call, so a whole duel
//! can run offline. Fixture files hold the replies separated by lines that
//! contain only `---`:
//!
//! ```text
//! Question: What is the chemical symbol for gold? Reply as 'Answer: [X]'.
//! Answer: [Au]
//! ---
//! Answer: [Au]
//! ---
//! Answer: au
//! ```

use async_trait::async_trait;
use duel_application::ports::completion_client::{CompletionClient, TransportError};
use duel_domain::Model;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing::debug;

const SEPARATOR: &str = "---";

pub struct ScriptedCompletionClient {
    model: Model,
    replies: Arc<Mutex<VecDeque<String>>>,
}

impl ScriptedCompletionClient {
    pub fn new(model: Model, replies: Vec<String>) -> Self {
        Self {
            model,
            replies: Arc::new(Mutex::new(replies.into())),
        }
    }

    /// Client for another model drawing from the same reply queue.
    ///
    /// Generator and solver share one fixture, so replies are consumed in
    /// call order across both.
    pub fn for_model(&self, model: Model) -> Self {
        Self {
            model,
            replies: Arc::clone(&self.replies),
        }
    }

    /// Load replies from a fixture file.
    pub fn from_file(model: Model, path: &Path) -> Result<Self, TransportError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            TransportError::Other(format!("Failed to read fixture {}: {}", path.display(), e))
        })?;
        let replies = Self::parse_fixture(&contents);
        debug!(count = replies.len(), path = %path.display(), "Loaded scripted replies");
        Ok(Self::new(model, replies))
    }

    /// Split fixture text on separator lines, dropping blank entries.
    fn parse_fixture(contents: &str) -> Vec<String> {
        let mut replies = Vec::new();
        let mut current = Vec::new();

        for line in contents.lines() {
            if line.trim() == SEPARATOR {
                replies.push(current.join("\n"));
                current.clear();
            } else {
                current.push(line);
            }
        }
        replies.push(current.join("\n"));

        replies
            .into_iter()
            .map(|r| r.trim().to_string())
            .filter(|r| !r.is_empty())
            .collect()
    }

    /// Number of replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.replies.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletionClient {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, _prompt: &str) -> Result<String, TransportError> {
        let mut replies = self
            .replies
            .lock()
            .map_err(|_| TransportError::Other("scripted reply queue poisoned".to_string()))?;
        replies.pop_front().ok_or(TransportError::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_fixture() {
        let fixture = "Question: Q?\nAnswer: [A]\n---\nAnswer: [A]\n  ---  \n\n---\nAnswer: a\n";
        let replies = ScriptedCompletionClient::parse_fixture(fixture);
        assert_eq!(replies, vec!["Question: Q?\nAnswer: [A]", "Answer: [A]", "Answer: a"]);
    }

    #[tokio::test]
    async fn test_replays_in_order_then_exhausts() {
        let client = ScriptedCompletionClient::new(
            Model::Gpt4oMini,
            vec!["one".to_string(), "two".to_string()],
        );

        assert_eq!(client.send("p").await.unwrap(), "one");
        assert_eq!(client.remaining(), 1);
        assert_eq!(client.send("p").await.unwrap(), "two");
        assert!(matches!(client.send("p").await, Err(TransportError::Exhausted)));
    }

    #[tokio::test]
    async fn test_for_model_shares_queue() {
        let generator = ScriptedCompletionClient::new(
            Model::Gpt4o,
            vec!["first".to_string(), "second".to_string()],
        );
        let solver = generator.for_model(Model::Gpt4oMini);

        assert_eq!(generator.send("p").await.unwrap(), "first");
        assert_eq!(solver.model(), &Model::Gpt4oMini);
        assert_eq!(solver.send("p").await.unwrap(), "second");
        assert_eq!(generator.remaining(), 0);
    }

    #[tokio::test]
    async fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Answer: [Au]\n---\nAnswer: au\n").unwrap();

        let client = ScriptedCompletionClient::from_file(Model::Gpt4o, file.path()).unwrap();
        assert_eq!(client.model(), &Model::Gpt4o);
        assert_eq!(client.send("p").await.unwrap(), "Answer: [Au]");
        assert_eq!(client.send("p").await.unwrap(), "Answer: au");
    }

    #[test]
    fn test_missing_fixture_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ScriptedCompletionClient::from_file(Model::Gpt4o, &dir.path().join("none"));
        assert!(matches!(result, Err(TransportError::Other(_))));
    }
}
