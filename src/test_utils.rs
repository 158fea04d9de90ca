use crate::llm::{ChatRequest, ChatResponse, Choice, LlmClient, Message};
use anyhow::{anyhow, Result};
use std::sync::{Arc, Mutex};

/// Scripted outcome for one mock invocation. Errors are carried as strings
/// because anyhow::Error is not Clone.
pub type ScriptedResult = std::result::Result<ChatResponse, String>;

#[derive(Clone, Debug)]
pub struct MockLlmClient {
    script: Arc<Mutex<Vec<ScriptedResult>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockLlmClient {
    pub fn new(script: Vec<ScriptedResult>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock that answers every invocation with the same content.
    pub fn replying(content: &str) -> Self {
        Self::new(vec![Ok(Self::response_with_content(content))])
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn response_with_content(content: &str) -> ChatResponse {
        ChatResponse {
            choices: vec![Choice {
                message: Message {
                    role: "assistant".to_string(),
                    content: Some(content.to_string()),
                },
                finish_reason: Some("stop".to_string()),
            }],
        }
    }
}

impl LlmClient for MockLlmClient {
    fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        self.requests
            .lock()
            .expect("requests lock")
            .push(request.clone());
        let mut script = self.script.lock().expect("script lock");
        if script.is_empty() {
            return Ok(MockLlmClient::response_with_content("ok"));
        }
        script.remove(0).map_err(|message| anyhow!(message))
    }
}
