//! askexpert-web: the single-page expert chat application.
//!
//! Serves an embedded HTML page plus a JSON chat API.
//!
//! Usage:
//!   askexpert-web [--port 8501]
//!
//! Environment variables:
//!   ASKEXPERT_PORT - Port to listen on (default: 8501)
//!   ASKEXPERT_MODEL - Completion model (default: gpt-4o)
//!   ASKEXPERT_BASE_URL - Completion endpoint base URL
//!   OPENAI_API_KEY - API credential (required)

use askexpert::config::Config;
use askexpert::llm::Client;
use askexpert::web::{run, AppState, WebConfig};
use std::env;
use std::sync::Arc;

fn main() {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let web_config = parse_config();
    let config = Config::from_env();

    // The credential is required before any request is served.
    let api_key = match config.resolve_api_key() {
        Ok(key) => key,
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState {
        model: config.model.clone(),
        client: Box::new(Client::new(&config.base_url, api_key)),
    });

    eprintln!("askexpert-web starting...");
    eprintln!("Port: {}", web_config.port);
    eprintln!("Model: {}", config.model);

    // The blocking completion client is built before the runtime starts;
    // per-request calls run on blocking workers.
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Fatal error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run(web_config, state)) {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

fn parse_config() -> WebConfig {
    let mut config = WebConfig::default();

    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" if i + 1 < args.len() => {
                if let Ok(port) = args[i + 1].parse() {
                    config.port = port;
                }
                i += 2;
            }
            _ => i += 1,
        }
    }

    // Environment variable overrides
    if let Ok(port) = env::var("ASKEXPERT_PORT") {
        if let Ok(p) = port.parse() {
            config.port = p;
        }
    }

    config
}
