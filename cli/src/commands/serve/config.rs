//! # InfraPulse Server Configuration
//!
//! File: cli/src/commands/serve/config.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! Configuration loading, merging, and validation for the portfolio server.
//! Settings combine from three layers:
//! 1. Command-line arguments (highest priority)
//! 2. An optional `.infrapulse.toml` in the site directory
//! 3. Built-in defaults (lowest priority)
//!
//! ## Examples
//!
//! Configuration file format:
//!
//! ```toml
//! # Server configuration
//! port = 9000
//! host = "0.0.0.0"
//! site_dir = "site"
//! enable_cors = true
//! ```
//!
//! A command-line argument only overrides the file when the user actually
//! set it (i.e. it differs from the clap default); boolean flags always win
//! when present. The site directory is tilde-expanded, canonicalized, and
//! must exist.
//!
use crate::core::error::{InfrapulseError, Result};
use anyhow::Context;
use clap::Parser;
use serde::Deserialize;
use std::net::IpAddr;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// The expected name for the server-specific configuration file.
const CONFIG_FILE_NAME: &str = ".infrapulse.toml";

/// # Serve Command Arguments (`ServeArgs`)
///
/// Command-line arguments accepted by `infrapulse serve`, parsed with clap.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Root directory of the site sources (holds `templates/` and
    /// `assets/`). Defaults to `site` next to the current directory.
    #[arg(default_value = "site")]
    pub site_dir: PathBuf,

    /// Network port the server will listen on.
    #[arg(long, short, default_value_t = 8000)]
    pub port: u16,

    /// Network IP address the server will bind to. Use `0.0.0.0` to accept
    /// connections from other machines.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Disables Cross-Origin Resource Sharing (CORS) headers on the API
    /// endpoints. CORS is enabled (permissive) by default.
    #[arg(long)]
    pub no_cors: bool,
}

/// # Effective Server Configuration (`ServeConfig`)
///
/// The final, validated settings the server runs with, after merging CLI
/// arguments and any `.infrapulse.toml` file.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// The network port the server will listen on.
    pub port: u16,

    /// The network IP address the server will bind to.
    pub host: IpAddr,

    /// The resolved, absolute path to the site sources.
    pub site_dir: PathBuf,

    /// Whether permissive CORS headers are applied.
    pub enable_cors: bool,
}

/// Helper struct for deserializing `.infrapulse.toml`. All fields optional
/// so users only specify what they override; unknown keys are rejected to
/// catch typos.
#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    port: Option<u16>,
    host: Option<String>, // Read as string to handle parse failures gracefully
    site_dir: Option<String>,
    enable_cors: Option<bool>,
}

/// # Load and Merge Server Configuration (`load_and_merge_config`)
///
/// Determines the effective configuration: start from the CLI arguments,
/// fold in a `.infrapulse.toml` found in the site directory, and let
/// explicitly-set arguments win. The resulting site directory is then
/// tilde-expanded, canonicalized, and validated.
///
/// ## Arguments
///
/// * `args`: The parsed `ServeArgs`.
///
/// ## Errors
///
/// Returns an error if the working directory cannot be determined, the
/// config file exists but cannot be parsed, or the resolved site directory
/// does not exist or is not a directory.
pub async fn load_and_merge_config(args: ServeArgs) -> Result<ServeConfig> {
    let mut effective = ServeConfig::from_args(&args);
    let cli_defaults = ServeArgs::parse_from([""]); // Defaults for comparison

    // The config file lives in the site directory named on the command line.
    let config_search_dir = absolute_site_path(&args.site_dir)?;
    debug!("Looking for config file in: {}", config_search_dir.display());

    if let Some(file_config) = load_config_from_dir(&config_search_dir)? {
        info!(
            "Loaded settings from {}",
            config_search_dir.join(CONFIG_FILE_NAME).display()
        );

        // A CLI value only sticks when the user actually set it.
        if args.port == cli_defaults.port {
            effective.port = file_config.port;
        }
        if args.host == cli_defaults.host {
            effective.host = file_config.host;
        }
        if !args.no_cors {
            effective.enable_cors = file_config.enable_cors;
        }
        effective.site_dir = file_config.site_dir;
    } else {
        debug!("No config file found. Using arguments.");
    }

    effective.resolve_site_dir().await?;
    Ok(effective)
}

/// Baseline defaults, used when neither the file nor the CLI overrides a
/// setting.
impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            port: 8000,
            host: IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
            site_dir: PathBuf::from("site"),
            enable_cors: true,
        }
    }
}

/// Expands `~` and makes a site path absolute against the working directory.
fn absolute_site_path(path: &Path) -> Result<PathBuf> {
    let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned());
    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(env::current_dir()
            .context("Failed to get current working directory")?
            .join(expanded))
    }
}

/// # Load Configuration from Directory (`load_config_from_dir`)
///
/// Reads and parses `.infrapulse.toml` in `search_dir` if present. A
/// relative `site_dir` inside the file is resolved against the file's own
/// directory. A missing file is not an error; `Ok(None)` is returned.
fn load_config_from_dir(search_dir: &Path) -> Result<Option<ServeConfig>> {
    let config_path = search_dir.join(CONFIG_FILE_NAME);

    if !config_path.is_file() {
        debug!("No config file found at {}", config_path.display());
        return Ok(None);
    }

    info!("Loading configuration from {}", config_path.display());

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

    let file_config: FileConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

    let defaults = ServeConfig::default();

    // Invalid host strings degrade to the default with a warning rather than
    // refusing to start.
    let host = match file_config.host {
        Some(ref host_str) => host_str.parse().unwrap_or_else(|e| {
            warn!(
                "Invalid host IP '{}' in config file ({}), using default {}",
                host_str, e, defaults.host
            );
            defaults.host
        }),
        None => defaults.host,
    };

    // A site_dir in the file points at the site root; when relative it is
    // anchored at the config file's directory. When absent, the directory
    // holding the config file is itself the site root.
    let site_dir = match file_config.site_dir.as_deref() {
        Some(dir) => {
            let dir = PathBuf::from(shellexpand::tilde(dir).into_owned());
            if dir.is_relative() {
                config_path
                    .parent()
                    .map(|parent| parent.join(&dir))
                    .unwrap_or(dir)
            } else {
                dir
            }
        }
        None => search_dir.to_path_buf(),
    };

    Ok(Some(ServeConfig {
        port: file_config.port.unwrap_or(defaults.port),
        host,
        site_dir,
        enable_cors: file_config.enable_cors.unwrap_or(defaults.enable_cors),
    }))
}

impl ServeConfig {
    /// Initial configuration reflecting only the command-line arguments.
    /// `enable_cors` is the inversion of the `--no-cors` flag.
    fn from_args(args: &ServeArgs) -> Self {
        Self {
            port: args.port,
            host: args.host,
            site_dir: args.site_dir.clone(),
            enable_cors: !args.no_cors,
        }
    }

    /// # Resolve and Validate the Site Directory (`resolve_site_dir`)
    ///
    /// Tilde-expands the configured site directory, canonicalizes it, and
    /// verifies it exists and is a directory. On success the config's
    /// `site_dir` holds the canonical path.
    ///
    /// ## Errors
    ///
    /// Fails when the path cannot be canonicalized (missing, inaccessible)
    /// or exists but is not a directory.
    async fn resolve_site_dir(&mut self) -> Result<()> {
        let absolute = absolute_site_path(&self.site_dir)?;

        match tokio::fs::canonicalize(&absolute).await {
            Ok(canonical) => {
                let metadata = tokio::fs::metadata(&canonical).await.with_context(|| {
                    format!("Failed to get metadata for '{}'", canonical.display())
                })?;
                if !metadata.is_dir() {
                    return Err(InfrapulseError::Config(format!(
                        "Site path is not a directory: {}",
                        canonical.display()
                    )))?;
                }
                self.site_dir = canonical;
                debug!("Resolved site directory to: {}", self.site_dir.display());
                Ok(())
            }
            Err(e) => Err(InfrapulseError::Config(format!(
                "Site directory '{}' could not be found or accessed: {}",
                absolute.display(),
                e
            )))?,
        }
    }
}

// --- Unit Tests ---
