//! # InfraPulse Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! This module aggregates the core components every command builds on: the
//! content model, the intent responder, error handling, and page rendering.
//!
//! ## Architecture
//!
//! - `content`: the immutable site content model and its queries
//! - `error`: error types and the shared `Result` alias
//! - `responder`: the keyword intent matcher behind the chat assistant
//! - `templating`: Tera rendering of pages from the content model
//!
//! Command handlers import these rather than reimplementing them, so the
//! server, the exporter, and the REPL all agree on content and behavior.
//!
pub mod content;
pub mod error;
pub mod responder;
pub mod templating;
