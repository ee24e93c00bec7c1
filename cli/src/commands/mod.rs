//! # InfraPulse Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! This module aggregates the top-level commands that comprise the
//! InfraPulse CLI and re-exports them for the entry point (`main.rs`).
//!
//! ## Command Groups
//!
//! - `serve`: host the portfolio over HTTP with its JSON APIs
//! - `export`: render the site to static files for deployment
//! - `chat`: run the intent responder as a terminal REPL
//!
//! Each command defines its own argument struct and an async handler that
//! `main.rs` dispatches to.
//!

/// Command running the site assistant as a terminal REPL.
pub mod chat;
/// Command rendering the site into a deployable static directory.
pub mod export;
/// Command hosting the portfolio server. Includes configuration, routes, and server logic.
pub mod serve;
