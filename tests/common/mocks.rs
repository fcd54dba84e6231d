use async_trait::async_trait;
use recruitbot::{Error, Result, llm::CompletionClient};
use std::sync::{Arc, Mutex};

/// Scripted completion client for dispatcher tests.
///
/// Replies are consumed front to back; every received prompt is recorded so
/// tests can assert on the exact text sent to the model.
pub struct MockCompletionClient {
    pub replies: Arc<Mutex<Vec<String>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_replies(self, replies: Vec<&str>) -> Self {
        *self.replies.lock().unwrap() = replies.into_iter().map(String::from).collect();
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::completion(error.clone()));
        }

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Err(Error::completion("no more scripted replies"));
        }

        Ok(replies.remove(0))
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}
