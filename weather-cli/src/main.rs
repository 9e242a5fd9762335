//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Startup (environment, logging, API key check)
//! - The interactive command loop
//! - Human-friendly output formatting

use std::io::IsTerminal;

use colored::Colorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use weather_core::{Config, provider::provider_from_config};

mod command;
mod display;
mod prompt;
mod repl;
mod session;

use prompt::{InquirePrompt, LinePrompt, PromptReader, ReaderPrompt};
use repl::Repl;
use session::Session;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    println!("{}", display::welcome_banner().cyan());

    let config = Config::from_env();
    if let Err(err) = config.require_api_key() {
        tracing::debug!(%err, "cannot start without an API key");
        println!("{}", display::missing_key_guidance().red());
        std::process::exit(1);
    }

    let provider = provider_from_config(&config)?;
    let session = Session::new(provider, config.units);

    let prompt: Box<dyn LinePrompt> = if std::io::stdin().is_terminal() {
        Box::new(InquirePrompt)
    } else {
        Box::new(ReaderPrompt::stdio())
    };
    let input = PromptReader::spawn(prompt)?;

    Repl::new(session, input, std::io::stdout()).run().await
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
