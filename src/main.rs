use anyhow::Result;
use askexpert::cli;
use askexpert::config::Config;
use askexpert::llm::Client;
use askexpert::persona::Persona;
use askexpert::Args;
use clap::Parser;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = Config::from_args(&args);

    // Missing credential is fatal before any request is made.
    let api_key = config.resolve_api_key()?;
    let client = Client::new(&config.base_url, api_key);

    let persona = Persona::from_label(&args.persona);

    if let Some(prompt) = &args.prompt {
        if prompt.is_empty() {
            anyhow::bail!("The prompt is empty. Enter a question to ask.");
        }
        cli::run_once(&client, &config, persona, prompt)
    } else {
        cli::run_repl(&client, &config, persona)
    }
}
