//! Mock text generator for testing.
//!
//! Configurable to return queued responses or inject errors, and records
//! every prompt it receives for verification.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{GeneratorError, TextGenerator};

/// A configured mock reply.
#[derive(Debug, Clone)]
enum MockReply {
    Success(String),
    Error(GeneratorError),
}

/// Mock implementation of the `TextGenerator` port.
#[derive(Debug, Clone, Default)]
pub struct MockGenerator {
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    /// Creates a mock with no queued replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        self.replies
            .lock()
            .expect("mock replies lock")
            .push_back(MockReply::Success(text.into()));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: GeneratorError) -> Self {
        self.replies
            .lock()
            .expect("mock replies lock")
            .push_back(MockReply::Error(error));
        self
    }

    /// Returns every prompt received so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("mock calls lock").clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GeneratorError> {
        self.calls
            .lock()
            .expect("mock calls lock")
            .push(prompt.to_string());

        let reply = self.replies.lock().expect("mock replies lock").pop_front();
        match reply {
            Some(MockReply::Success(text)) => Ok(text),
            Some(MockReply::Error(error)) => Err(error),
            None => Ok("Mock generated output.".to_string()),
        }
    }
}
