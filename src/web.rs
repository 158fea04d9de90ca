//! Single-page web front end using axum.
//!
//! Serves one embedded HTML page and a JSON chat API. Every API request is
//! an isolated unit of work: the shared state is the model name and an
//! immutable client handle, so one request's failure cannot leak into the
//! next.

use crate::chat;
use crate::llm::LlmClient;
use crate::persona::Persona;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

/// Web server configuration
pub struct WebConfig {
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self { port: 8501 }
    }
}

/// Shared state for the web server
pub struct AppState {
    pub model: String,
    pub client: Box<dyn LlmClient>,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/chat", post(chat_handler))
        .with_state(state)
}

/// Run the web server
pub async fn run(config: WebConfig, state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    eprintln!("[web] Listening on port {}", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[derive(Debug, Deserialize)]
pub struct ChatSendRequest {
    pub message: String,
    #[serde(default)]
    pub persona: String,
}

#[derive(Debug, Serialize)]
pub struct ChatSendResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl ChatSendResponse {
    pub fn ok(text: String) -> Self {
        Self {
            ok: true,
            text: Some(text),
            error: None,
        }
    }

    pub fn error(code: &str, message: &str) -> Self {
        Self {
            ok: false,
            text: None,
            error: Some(ErrorBody {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "model": state.model,
    }))
}

async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ChatSendRequest>,
) -> (StatusCode, Json<ChatSendResponse>) {
    // Empty input never reaches the completion client.
    if req.message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ChatSendResponse::error(
                "empty_input",
                "Enter a question before asking.",
            )),
        );
    }

    let request_id = uuid::Uuid::new_v4().to_string();
    let persona = Persona::from_label(&req.persona);
    eprintln!(
        "[web] chat {} persona={} chars={}",
        request_id,
        persona.label(),
        req.message.len()
    );

    // The completion client is blocking; keep the call off the async workers.
    let worker_state = state.clone();
    let message = req.message;
    let result = tokio::task::spawn_blocking(move || {
        chat::generate_response(
            worker_state.client.as_ref(),
            &worker_state.model,
            persona,
            &message,
        )
    })
    .await;

    match result {
        Ok(Ok(text)) => (StatusCode::OK, Json(ChatSendResponse::ok(text))),
        Ok(Err(e)) => {
            eprintln!("[web] chat {} failed: {}", request_id, e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ChatSendResponse::error("upstream_error", &e.to_string())),
            )
        }
        Err(e) => {
            eprintln!("[web] chat {} worker failed: {}", request_id, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ChatSendResponse::error(
                    "internal_error",
                    "request worker failed",
                )),
            )
        }
    }
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

const INDEX_PAGE: &str = r##"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Ask an Expert</title>
    <style>
        body { font-family: system-ui, sans-serif; max-width: 800px; margin: 2rem auto; padding: 1rem; }
        h1 { color: #333; }
        textarea { width: 100%; height: 150px; font: inherit; padding: 0.5rem; box-sizing: border-box; }
        fieldset { border: 1px solid #ccc; border-radius: 4px; margin: 1rem 0; }
        label { display: block; margin: 0.25rem 0; }
        button { padding: 0.5rem 1.5rem; font: inherit; cursor: pointer; }
        .warning { color: #a66f00; margin: 0.5rem 0; }
        .error { color: #b00020; margin: 0.5rem 0; }
        .answer { padding: 1rem; background: #f0f0f0; border-radius: 4px; white-space: pre-wrap; }
        .hidden { display: none; }
    </style>
</head>
<body>
    <h1>Ask an Expert</h1>
    <p>
        Type your question, pick the expert who should answer it, and press
        <strong>Ask</strong>.
    </p>

    <textarea id="question" placeholder="Type your question here"></textarea>

    <fieldset>
        <legend>Who should answer?</legend>
        <label><input type="radio" name="persona" value="consultant" checked> IT Consultant</label>
        <label><input type="radio" name="persona" value="career"> Career Advisor</label>
        <label><input type="radio" name="persona" value="general"> General Assistant</label>
    </fieldset>

    <button id="ask">Ask</button>
    <span id="loading" class="hidden">Generating an answer...</span>

    <div id="warning" class="warning hidden"></div>
    <div id="error" class="error hidden"></div>

    <h2 id="answer-heading" class="hidden">Answer</h2>
    <div id="answer" class="answer hidden"></div>

    <script>
        const el = (id) => document.getElementById(id);

        function reset() {
            for (const id of ["warning", "error", "answer", "answer-heading"]) {
                el(id).classList.add("hidden");
            }
        }

        async function ask() {
            reset();

            const message = el("question").value;
            if (!message) {
                el("warning").textContent = "Enter a question first.";
                el("warning").classList.remove("hidden");
                return;
            }

            const persona = document.querySelector('input[name="persona"]:checked').value;

            el("ask").disabled = true;
            el("loading").classList.remove("hidden");
            try {
                const resp = await fetch("/api/chat", {
                    method: "POST",
                    headers: { "Content-Type": "application/json" },
                    body: JSON.stringify({ message, persona }),
                });
                const body = await resp.json();
                if (body.ok) {
                    el("answer").textContent = body.text;
                    el("answer").classList.remove("hidden");
                    el("answer-heading").classList.remove("hidden");
                } else {
                    el("error").textContent = body.error.message + " You can try again.";
                    el("error").classList.remove("hidden");
                }
            } catch (err) {
                el("error").textContent = "Request failed: " + err + ". You can try again.";
                el("error").classList.remove("hidden");
            } finally {
                el("ask").disabled = false;
                el("loading").classList.add("hidden");
            }
        }

        el("ask").addEventListener("click", ask);
    </script>
</body>
</html>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockLlmClient;

    fn state_with(mock: &MockLlmClient) -> Arc<AppState> {
        Arc::new(AppState {
            model: "gpt-4o".to_string(),
            client: Box::new(mock.clone()),
        })
    }

    fn send(message: &str, persona: &str) -> ChatSendRequest {
        ChatSendRequest {
            message: message.to_string(),
            persona: persona.to_string(),
        }
    }

    #[tokio::test]
    async fn test_empty_message_rejected_without_invocation() {
        let mock = MockLlmClient::new(vec![]);
        let state = state_with(&mock);

        let (status, Json(body)) = chat_handler(State(state), Json(send("", "consultant"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.ok);
        assert_eq!(body.error.unwrap().code, "empty_input");
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_chat_returns_completion() {
        let mock = MockLlmClient::replying("Try shorter sprints.");
        let state = state_with(&mock);

        let (status, Json(body)) = chat_handler(
            State(state),
            Json(send("How do I improve team velocity?", "consultant")),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.ok);
        assert_eq!(body.text.as_deref(), Some("Try shorter sprints."));

        let requests = mock.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].messages[0]["role"], "system");
        assert_eq!(
            requests[0].messages[0]["content"],
            Persona::ItConsultant.system_instruction()
        );
        assert_eq!(requests[0].messages[1]["role"], "user");
        assert_eq!(
            requests[0].messages[1]["content"],
            "How do I improve team velocity?"
        );
    }

    #[tokio::test]
    async fn test_unknown_persona_falls_through_to_general() {
        let mock = MockLlmClient::replying("Certainly.");
        let state = state_with(&mock);

        let (status, _) =
            chat_handler(State(state), Json(send("What is a quine?", "astrologer"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            mock.requests()[0].messages[0]["content"],
            Persona::GeneralAssistant.system_instruction()
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_is_reported_and_isolated() {
        let mock = MockLlmClient::new(vec![
            Err("API error 500: upstream melted".to_string()),
            Ok(MockLlmClient::response_with_content("Back to normal.")),
        ]);
        let state = state_with(&mock);

        let (status, Json(body)) =
            chat_handler(State(state.clone()), Json(send("first", "general"))).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body.error.unwrap().code, "upstream_error");

        // The same state serves the next request untouched.
        let (status, Json(body)) =
            chat_handler(State(state), Json(send("second", "general"))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.text.as_deref(), Some("Back to normal."));
    }

    #[tokio::test]
    async fn test_index_page_offers_all_personas() {
        let Html(page) = index_handler().await;
        for persona in Persona::ALL {
            assert!(page.contains(persona.display_name()));
            assert!(page.contains(&format!("value=\"{}\"", persona.label())));
        }
        // The consultant is the preselected default.
        assert!(page.contains("value=\"consultant\" checked"));
    }

    #[tokio::test]
    async fn test_health_reports_model() {
        let mock = MockLlmClient::new(vec![]);
        let state = state_with(&mock);
        let response = health_handler(State(state)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
