//! notedown CLI - export notes from a hosted note service to Markdown
//!
//! Thin glue over notedown-core: environment/token loading, command
//! dispatch, and output file writing.

mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::config::ExportConfig;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(()) => {}
        Err(CliError::Core(notedown_core::Error::NoChange)) => {
            println!("Nothing changed since the last export.");
        }
        Err(error) => {
            eprintln!("Error: {error}");
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notedown=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = ExportConfig::from_env()?;

    match cli.command {
        Commands::Notebooks => commands::run_notebooks(&config).await,
        Commands::Export { notebook, output } => {
            commands::run_export(&notebook, &output, &config).await
        }
        Commands::Note { guid } => commands::run_note(&guid, &config).await,
    }
}
