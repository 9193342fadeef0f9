//! Binary entry point for wordcensor.
//!
//! This binary provides the CLI interface and HTTP server for the
//! sensitive-word censorship service.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
// Allow multiple crate versions from transitive dependencies
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use wordcensor::config::CensorConfig;
use wordcensor::observability::{self, InitOptions};
use wordcensor::services::ServiceContainer;
use wordcensor::{Result, cli};

/// Wordcensor - masks sensitive words in text.
#[derive(Parser)]
#[command(name = "wordcensor")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API.
    Serve {
        /// Interface to bind (overrides config).
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides config).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Mask sensitive words in a phrase.
    Sanitize {
        /// The phrase to sanitize.
        phrase: String,
    },

    /// Manage the sensitive word list.
    Words {
        #[command(subcommand)]
        action: WordsAction,
    },

    /// Show configuration.
    Config {
        /// Print the full resolved configuration.
        #[arg(long)]
        show: bool,
    },
}

/// Word list actions.
#[derive(Subcommand)]
enum WordsAction {
    /// List all sensitive words.
    List,

    /// Add a sensitive word.
    Add {
        /// The word to add.
        word: String,
    },

    /// Rename a sensitive word.
    Update {
        /// Current text of the word.
        from_word: String,

        /// Replacement text.
        to_word: String,

        /// Target the entry with this id.
        #[arg(long)]
        id: Option<i64>,
    },

    /// Remove a sensitive word.
    Remove {
        /// Text of the word to remove.
        word: Option<String>,

        /// Remove the entry with this id.
        #[arg(long)]
        id: Option<i64>,
    },
}

/// Main entry point.
#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let config = match CensorConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    let expose_metrics = matches!(cli.command, Commands::Serve { .. });
    if let Err(e) = observability::init_from_config(
        &config.observability,
        InitOptions {
            verbose: cli.verbose,
            metrics_expose: expose_metrics,
        },
    ) {
        eprintln!("Failed to initialize observability: {e}");
        return ExitCode::FAILURE;
    }

    match run_command(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "Command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Runs the selected command.
async fn run_command(command: Commands, config: &CensorConfig) -> Result<()> {
    match command {
        Commands::Serve { host, port } => cli::cmd_serve(config, host, port).await,

        Commands::Sanitize { phrase } => {
            let services = ServiceContainer::from_config(config)?;
            cli::cmd_sanitize(&services, &phrase, &mut io::stdout().lock())
        },

        Commands::Words { action } => {
            let services = ServiceContainer::from_config(config)?;
            run_words(&services, action, &mut io::stdout().lock())
        },

        Commands::Config { show } => cli::cmd_config(config, show, &mut io::stdout().lock()),
    }
}

fn run_words(
    services: &ServiceContainer,
    action: WordsAction,
    out: &mut impl io::Write,
) -> Result<()> {
    match action {
        WordsAction::List => cli::cmd_words_list(services, out),
        WordsAction::Add { word } => cli::cmd_words_add(services, &word, out),
        WordsAction::Update {
            from_word,
            to_word,
            id,
        } => cli::cmd_words_update(services, id, &from_word, &to_word, out),
        WordsAction::Remove { word, id } => {
            cli::cmd_words_remove(services, id, word.as_deref(), out)
        },
    }
}
