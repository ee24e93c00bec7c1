//! # InfraPulse Serve Command
//!
//! File: cli/src/commands/serve/mod.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! `infrapulse serve` hosts the portfolio locally (or on a LAN interface):
//! the rendered page at `/`, JSON APIs for the chat widget, project filter,
//! and contact form under `/api`, and the asset tree at `/assets`.
//!
//! ## Architecture
//!
//! - `config.rs`: configuration loading, merging, and validation
//! - `server_logic.rs`: port discovery, middleware, bind, and shutdown
//! - `routes.rs`: handlers and payload types
//!
//! ## Examples
//!
//! ```bash
//! # Serve the default ./site directory
//! infrapulse serve
//!
//! # Serve on all interfaces with a custom port
//! infrapulse serve --host 0.0.0.0 --port 9000 ./site
//! ```
//!
use crate::core::error::Result;
use tracing::info;

// --- Subcommand Argument Re-export ---
pub use config::ServeArgs;

// --- Submodule Declarations ---

/// Handles configuration loading and merging for the portfolio server.
pub mod config;

/// Route handlers and payload types for the page and JSON APIs.
pub mod routes;

/// Contains the core Axum-based HTTP server implementation.
pub mod server_logic;

/// # Handle Serve Command (`handle_serve`)
///
/// Entry point for `infrapulse serve`: loads and merges the configuration,
/// then hands off to `run_server`, which blocks until shutdown.
///
/// ## Arguments
///
/// * `args`: The parsed `ServeArgs` from the command line.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` after a clean shutdown; an `Err` when
///   configuration or server startup fails.
pub async fn handle_serve(args: ServeArgs) -> Result<()> {
    info!("Handling serve command with args: {:?}", args);

    let config = config::load_and_merge_config(args).await?;
    info!("Effective server config: {:?}", config);

    server_logic::run_server(config).await?;
    Ok(())
}
