use anyhow::{anyhow, Context, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Value>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: Message,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Message {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Trait for LLM clients to allow mocking and abstraction
pub trait LlmClient: Send + Sync {
    fn chat(&self, request: &ChatRequest) -> Result<ChatResponse>;
}

/// Blocking HTTP client for an OpenAI-compatible chat completion endpoint.
///
/// One attempt per call: there is no retry or backoff policy, and the
/// transport timeout is whatever reqwest defaults to. Failures carry the
/// HTTP status and response body and propagate to the caller.
pub struct Client {
    base_url: String,
    api_key: SecretString,
    http: reqwest::blocking::Client,
}

impl Client {
    pub fn new(base_url: &str, api_key: SecretString) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            http: reqwest::blocking::Client::new(),
        }
    }
}

impl LlmClient for Client {
    fn chat(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .context("request to completion endpoint failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(anyhow!("API error {}: {}", status.as_u16(), body));
        }

        let body: ChatResponse = resp.json()?;
        Ok(body)
    }
}
