use super::{Backend, CompletionRequest};
use crate::error::ProviderError;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

enum Scripted {
    Text(String),
    Fail(String),
}

/// Scripted backend for tests. Replies are consumed in order; the last one
/// repeats. Every request is recorded.
pub struct StubBackend {
    name: &'static str,
    replies: Mutex<VecDeque<Scripted>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubBackend {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn reply(self, text: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Scripted::Text(text.to_string()));
        self
    }

    pub fn fail(self, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Scripted::Fail(body.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.prompt).collect()
    }
}

#[async_trait]
impl Backend for StubBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<String, ProviderError> {
        self.requests.lock().unwrap().push(request.clone());

        let mut replies = self.replies.lock().unwrap();
        let next = if replies.len() > 1 {
            replies.pop_front()
        } else {
            None
        };
        let scripted = next.as_ref().or_else(|| replies.front());

        match scripted {
            Some(Scripted::Text(text)) => Ok(text.trim().to_string()),
            Some(Scripted::Fail(body)) => Err(ProviderError::Api {
                backend: self.name,
                status: 500,
                body: body.clone(),
            }),
            None => Err(ProviderError::EmptyResponse(self.name)),
        }
    }
}
