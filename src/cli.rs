//! Terminal front end: one-shot prompts and the interactive loop.
//!
//! Every submitted line is an independent single-shot request. No history is
//! sent to the model; only the readline history persists between runs.

use crate::chat;
use crate::config::Config;
use crate::llm::LlmClient;
use crate::persona::Persona;
use anyhow::Result;
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "askexpert",
    about = "Ask a question, answered by the expert persona of your choice"
)]
pub struct Args {
    #[arg(short, long, help = "One-shot prompt mode")]
    pub prompt: Option<String>,

    #[arg(
        long,
        default_value = "consultant",
        help = "Expert persona: consultant, career, or general"
    )]
    pub persona: String,

    #[arg(long, help = "Override the completion model")]
    pub model: Option<String>,

    #[arg(long, help = "Override the completion endpoint base URL")]
    pub base_url: Option<String>,

    #[arg(long, help = "API key (falls back to OPENAI_API_KEY)")]
    pub api_key: Option<String>,
}

/// Get the path to the history file
fn history_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".askexpert")
        .join("history")
}

pub fn run_once(
    client: &dyn LlmClient,
    config: &Config,
    persona: Persona,
    prompt: &str,
) -> Result<()> {
    let reply = chat::generate_response(client, &config.model, persona, prompt)?;
    println!("{}", reply);
    Ok(())
}

pub fn run_repl(client: &dyn LlmClient, config: &Config, mut persona: Persona) -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    let history_file = history_path();
    let _ = rl.load_history(&history_file);

    println!("askexpert - type /help for commands, /exit to quit");
    println!("Persona: {}", persona.display_name());

    loop {
        match rl.readline(">>> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    eprintln!("Enter a question first.");
                    continue;
                }
                rl.add_history_entry(line)?;

                if line.starts_with('/') {
                    if handle_command(line, &mut persona) {
                        break;
                    }
                    continue;
                }

                match chat::generate_response(client, &config.model, persona, line) {
                    Ok(reply) => println!("{}", reply),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Input error: {}", e);
                break;
            }
        }
    }

    // Save command history (create parent directory if needed)
    if let Some(parent) = history_file.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let _ = rl.save_history(&history_file);

    Ok(())
}

/// Handle a slash command. Returns true when the loop should exit.
fn handle_command(line: &str, persona: &mut Persona) -> bool {
    let mut parts = line.split_whitespace();
    match parts.next().unwrap_or("") {
        "/exit" | "/quit" => return true,
        "/persona" => match parts.next() {
            Some(label) => {
                *persona = Persona::from_label(label);
                println!("Persona: {}", persona.display_name());
            }
            None => println!("Persona: {}", persona.display_name()),
        },
        "/help" => {
            println!("/persona [consultant|career|general] - show or switch persona");
            println!("/exit - quit");
        }
        other => println!("Unknown command: {}", other),
    }
    false
}
