//! Scripted completion client shared by use case tests.

use crate::ports::completion_client::{CompletionClient, TransportError};
use async_trait::async_trait;
use duel_domain::Model;
use std::collections::VecDeque;
use std::sync::Mutex;

pub(crate) struct MockClient {
    model: Model,
    replies: Mutex<VecDeque<Result<String, TransportError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockClient {
    pub(crate) fn new(replies: Vec<&str>) -> Self {
        Self::with_results(replies.into_iter().map(|r| Ok(r.to_string())).collect())
    }

    pub(crate) fn with_results(replies: Vec<Result<String, TransportError>>) -> Self {
        Self {
            model: Model::Gpt4oMini,
            replies: Mutex::new(VecDeque::from(replies)),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn repeat(reply: &str, times: usize) -> Self {
        Self::new(vec![reply; times])
    }

    pub(crate) fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub(crate) fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, prompt: &str) -> Result<String, TransportError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(TransportError::Exhausted))
    }
}
