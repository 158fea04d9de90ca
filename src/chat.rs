//! Prompt assembly and single-shot completion invocation.
//!
//! A request is one system instruction plus one user message, submitted once.
//! No history is carried between invocations and nothing is cached; every
//! call is an isolated unit of work.

use crate::llm::{ChatRequest, LlmClient};
use crate::persona::Persona;
use anyhow::{anyhow, Result};
use serde_json::{json, Value};

/// Build the two-message prompt: the persona's system instruction followed
/// by the user input, verbatim.
pub fn build_messages(persona: Persona, user_input: &str) -> Vec<Value> {
    vec![
        json!({
            "role": "system",
            "content": persona.system_instruction(),
        }),
        json!({
            "role": "user",
            "content": user_input,
        }),
    ]
}

/// Run one completion for `user_input` under `persona` and return the
/// model's text.
///
/// Exactly one outbound call; client failures propagate unchanged so the
/// calling layer decides presentation. Callers enforce the non-empty input
/// constraint before invoking this.
pub fn generate_response(
    client: &dyn LlmClient,
    model: &str,
    persona: Persona,
    user_input: &str,
) -> Result<String> {
    let request = ChatRequest {
        model: model.to_string(),
        messages: build_messages(persona, user_input),
    };

    let response = client.chat(&request)?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| anyhow!("model returned an empty completion"))
}
