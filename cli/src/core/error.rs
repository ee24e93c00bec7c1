//! # InfraPulse Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the InfraPulse application. It provides a consistent approach
//! to error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `InfrapulseError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the domains this tool touches:
//! - Configuration errors (CLI/file merge, invalid site paths)
//! - Filesystem errors (missing templates or asset trees)
//! - Template rendering errors (wrapped `tera::Error`)
//! - Static export errors (unsafe target directories)
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !site_dir.is_dir() {
//!     return Err(InfrapulseError::Config(format!(
//!         "Site path is not a directory: {}",
//!         site_dir.display()
//!     )))?;
//! }
//!
//! // Add context to errors using anyhow
//! let raw = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read template: {}", path.display()))?;
//! ```
//!
//! Errors propagate to `main`, which prints them once and exits non-zero.
//!
use thiserror::Error;

/// Custom error type for the InfraPulse application.
#[derive(Error, Debug)]
pub enum InfrapulseError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Template rendering error: {source}")]
    Template {
        #[from]
        source: tera::Error,
    },

    #[error("Export error: {0}")]
    Export(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
