use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use askdocs::cli::{Cli, Commands};
use askdocs::config::Config;
use askdocs::logging::init_logging;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let mut config = match Config::load(&root) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {:#}; using defaults", e);
            Config::default()
        }
    };
    if let Some(url) = cli.backend_url {
        config.backend.url = url;
    }

    // The relay is a long-running service: always log to stderr
    if matches!(cli.command, Commands::Serve { .. }) {
        config.logging.stderr = true;
    }

    // Held until exit so buffered log lines are flushed
    let _logging_guard = init_logging(&config.logging, &root)?;

    tracing::debug!("Backend: {}", config.backend.url);

    let ok = match cli.command {
        Commands::Init { force } => {
            askdocs::commands::init::run(&root, force)?;
            true
        }
        Commands::Status => askdocs::commands::status::run(&config).await?,
        Commands::Ask { question } => askdocs::commands::ask::run(&config, &question).await?,
        Commands::Chat => {
            askdocs::commands::chat::run(&config).await?;
            true
        }
        Commands::Serve { port, host } => {
            askdocs::commands::serve::run(&config, port, host).await?;
            true
        }
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
