//! # InfraPulse HTTP Server Implementation
//!
//! File: cli/src/commands/serve/server_logic.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! This module implements the HTTP server behind `infrapulse serve`:
//! - Renders the portfolio and 404 pages once at startup
//! - Port availability checking with automatic fallback
//! - CORS configuration and request tracing middleware
//! - Graceful shutdown handling (Ctrl+C / SIGTERM)
//!
//! ## Architecture
//!
//! 1. Find an available port, retrying upwards if the requested one is busy
//! 2. Render the pages and build the shared state
//! 3. Assemble the Axum router (routes + middleware)
//! 4. Print the connection banner, bind, and serve until shutdown
//!
//! The split between this module and `routes.rs` mirrors the split between
//! "running a server" and "what the server says": handlers never deal with
//! sockets, and this module never deals with payloads.
//!
use super::config::ServeConfig;
use super::routes::{self, AppState};
use crate::core::content::SiteContent;
use crate::core::error::Result;
use crate::core::templating;
use anyhow::Context;
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

/// Template names the server renders at startup.
const INDEX_TEMPLATE: &str = "index.html.tera";
const NOT_FOUND_TEMPLATE: &str = "404.html.tera";

/// # Run HTTP Server (`run_server`)
///
/// Initializes and starts the portfolio server according to the provided
/// configuration.
///
/// ## Process:
/// 1. Determines an available network address using `find_available_port`,
///    retrying if the configured port is occupied.
/// 2. Renders the index and 404 pages from the content model.
/// 3. Creates the application router with `create_app`.
/// 4. Prints the server banner (site directory, URLs, CORS status).
/// 5. Binds a `TcpListener` and serves with graceful shutdown installed.
///
/// ## Arguments
///
/// * `config`: The validated `ServeConfig` (port, host, site dir, CORS).
///
/// ## Errors
///
/// Fails when no port is available within the attempt limit, a template
/// cannot be rendered, the listener cannot bind, or the server hits a fatal
/// error while running.
pub async fn run_server(config: ServeConfig) -> Result<()> {
    let max_port_attempts = 10;
    let addr = find_available_port(config.host, config.port, max_port_attempts).await?;

    // Render everything up front: the markup is static, so a render error
    // should stop startup rather than surface as a 500 later.
    let content = SiteContent::new();
    let index_html = templating::render_page(&config.site_dir, INDEX_TEMPLATE, &content)?;
    let not_found_html = templating::render_page(&config.site_dir, NOT_FOUND_TEMPLATE, &content)?;

    let state = Arc::new(AppState {
        index_html,
        not_found_html,
        content,
    });

    let app = create_app(&config, state);

    println!("\n=================================================================");
    println!("📂 Site sources:      {}", config.site_dir.display());
    println!("🌐 Local URL:         http://localhost:{}", addr.port());
    println!("⚙️  Binding to address: {}", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("=================================================================\n");

    info!(
        "Starting server on {} for site {}",
        addr,
        config.site_dir.display()
    );
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Resolves when Ctrl+C or (on Unix) SIGTERM is received, letting
/// `axum::serve` drain in-flight requests before exiting.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, initiating graceful shutdown...");
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

/// # Find Available Port (`find_available_port`)
///
/// Tries to bind `start_port` on `req_host`, walking upwards through
/// consecutive ports for at most `max_attempts` tries when a port is busy.
///
/// ## Returns
///
/// * `Result<SocketAddr>`: The first address that accepted a bind. The probe
///   listener is dropped immediately, freeing the port for the real server.
///
/// ## Errors
///
/// Fails when no port in the attempted range could be bound.
async fn find_available_port(
    req_host: std::net::IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, successfully bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port += 1;
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host,
        start_port,
        max_attempts
    )
}

/// # Create Axum Application (`create_app`)
///
/// Builds the router from `routes::routes` and applies the middleware
/// stack: request tracing always, permissive CORS when enabled.
fn create_app(config: &ServeConfig, state: Arc<AppState>) -> Router {
    let cors_layer = if config.enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new() // Effectively a no-op layer.
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    routes::routes(state, &config.site_dir).layer(
        ServiceBuilder::new()
            .layer(trace_layer) // Apply tracing first.
            .layer(cors_layer), // Then apply CORS.
    )
}

// --- Unit Tests ---
