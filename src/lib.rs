//! askexpert - ask a question, answered by the expert persona of your choice.
//!
//! This library provides the core functionality for the askexpert CLI
//! and the askexpert-web single-page front end.

pub mod chat;
pub mod cli;
pub mod config;
pub mod llm;
pub mod persona;
pub mod web;

#[cfg(test)]
pub mod test_utils;

// Re-export Args for the binaries
pub use cli::Args;
