// Testing utilities for the domain layer
// This module is only available in tests or when the "mock" feature is enabled

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::relay::{CompletionClient, CompletionRequest, RelayError};

/// Completion client that replays scripted replies in order.
///
/// Once the script runs out the last reply is repeated. Every request is
/// recorded so tests can inspect the prompts that were sent.
pub struct ScriptedCompletionClient {
    replies: Mutex<VecDeque<Result<String, RelayError>>>,
    last: Mutex<Option<Result<String, RelayError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
    configured: bool,
}

impl ScriptedCompletionClient {
    pub fn new(replies: Vec<Result<String, RelayError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            last: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
            configured: true,
        }
    }

    /// Always answer with the same text
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::new(vec![Ok(reply.into())])
    }

    /// Always fail with the same error
    pub fn failing(error: RelayError) -> Self {
        Self::new(vec![Err(error)])
    }

    /// Report the client as unconfigured, like a missing API key
    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CompletionClient for ScriptedCompletionClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String, RelayError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }

        let next = self.replies.lock().ok().and_then(|mut r| r.pop_front());
        let mut last = self
            .last
            .lock()
            .map_err(|e| RelayError::Transport(e.to_string()))?;

        match next {
            Some(reply) => {
                *last = Some(reply.clone());
                reply
            }
            None => last
                .clone()
                .unwrap_or_else(|| Err(RelayError::Transport("script exhausted".to_string()))),
        }
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
