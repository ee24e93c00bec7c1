//! # InfraPulse Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! This file serves as the main entry point for the InfraPulse CLI. It
//! handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! Each top-level command (`serve`, `export`, `chat`) is a variant in the
//! `Commands` enum, mapped to a handler function in its module. All errors
//! propagate back to this level, are logged, printed once, and turned into
//! a non-zero exit code.
//!
//! ## Examples
//!
//! Basic usage:
//!
//! ```bash
//! # Serve the site locally
//! infrapulse serve
//!
//! # Export with debug logging
//! infrapulse -vv export ./dist
//!
//! # Chat with the assistant in the terminal
//! infrapulse chat
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Command logic (serve, export, chat)
mod core; // Core infrastructure (content, errors, responder, templating)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "infrapulse",
    about = "📡 InfraPulse: Kamal Raj's portfolio site, served, exported, and chatted with from one binary",
    long_about = "Serve the portfolio locally with its chat, gallery, and contact APIs,\n\
                  export it as a static site, or talk to the assistant in the terminal.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "s")]
    Serve(commands::serve::ServeArgs),
    #[command(alias = "e")]
    Export(commands::export::ExportArgs),
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Serve(args) => commands::serve::handle_serve(args).await,
        Commands::Export(args) => commands::export::handle_export(args).await,
        Commands::Chat(args) => commands::chat::handle_chat(args).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
