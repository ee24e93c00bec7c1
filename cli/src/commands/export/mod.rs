//! # InfraPulse Export Command
//!
//! File: cli/src/commands/export/mod.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! `infrapulse export` materializes the site as deployable static files:
//! every template under `<site_dir>/templates` is rendered to HTML and the
//! asset tree is copied alongside. The output of an export and the output
//! of the running server are the same markup by construction, since both go
//! through `core::templating`.
//!
//! ## Examples
//!
//! ```bash
//! # Render ./site into ./dist
//! infrapulse export
//!
//! # Explicit directories, overwriting an existing target
//! infrapulse export --site-dir ./site --force ./public
//! ```
//!
use crate::core::content::SiteContent;
use crate::core::error::{InfrapulseError, Result};
use crate::core::templating::{self, ASSETS_SUBDIR};
use anyhow::Context;
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// # Export Command Arguments (`ExportArgs`)
///
/// Command-line arguments accepted by `infrapulse export`.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Directory receiving the rendered site. Created if missing.
    #[arg(default_value = "dist")]
    pub out_dir: PathBuf,

    /// Root directory of the site sources (holds `templates/` and
    /// `assets/`).
    #[arg(long, default_value = "site")]
    pub site_dir: PathBuf,

    /// Allow exporting into a non-empty target directory.
    #[arg(long)]
    pub force: bool,
}

/// # Handle Export Command (`handle_export`)
///
/// Renders every site template into the target directory and copies the
/// asset tree next to the rendered pages.
///
/// ## Workflow:
/// 1. Tilde-expand and validate the site directory.
/// 2. Refuse a non-empty target unless `--force` was given.
/// 3. Render templates via `templating::render_site_templates`.
/// 4. Copy `<site_dir>/assets` into `<out_dir>/assets` (skipped with a
///    warning when the site has no assets).
///
/// ## Errors
///
/// Fails when the site directory is missing, the target is non-empty
/// without `--force`, or rendering/copying fails.
pub async fn handle_export(args: ExportArgs) -> Result<()> {
    info!("Handling export command with args: {:?}", args);

    let site_dir = expand(&args.site_dir);
    if !site_dir.is_dir() {
        return Err(InfrapulseError::FileSystem(format!(
            "Site directory not found: {}",
            site_dir.display()
        )))?;
    }

    let out_dir = expand(&args.out_dir);
    ensure_target_is_safe(&out_dir, args.force)?;
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create output directory '{}'", out_dir.display()))?;

    let content = SiteContent::new();
    let pages = templating::render_site_templates(&site_dir, &out_dir, &content)?;

    let assets_dir = site_dir.join(ASSETS_SUBDIR);
    if assets_dir.is_dir() {
        let mut options = fs_extra::dir::CopyOptions::new();
        options.overwrite = true;
        fs_extra::dir::copy(&assets_dir, &out_dir, &options).with_context(|| {
            format!(
                "Failed to copy assets from '{}' to '{}'",
                assets_dir.display(),
                out_dir.display()
            )
        })?;
    } else {
        warn!(
            "No '{}' directory under '{}'; exporting pages only",
            ASSETS_SUBDIR,
            site_dir.display()
        );
    }

    println!(
        "📦 Exported {} page(s) to '{}'. Upload the directory to any static host.",
        pages,
        out_dir.display()
    );
    Ok(())
}

/// Expands `~` in a user-supplied path.
fn expand(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

/// A non-empty target is only written with `--force`; stale files from an
/// earlier export would otherwise linger next to fresh ones unnoticed.
fn ensure_target_is_safe(out_dir: &Path, force: bool) -> Result<()> {
    if !out_dir.exists() || force {
        return Ok(());
    }

    let mut entries = fs::read_dir(out_dir)
        .with_context(|| format!("Failed to read output directory '{}'", out_dir.display()))?;
    if entries.next().is_some() {
        return Err(InfrapulseError::Export(format!(
            "Output directory '{}' is not empty. Re-run with --force to overwrite.",
            out_dir.display()
        )))?;
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Lays down a minimal site tree for export tests.
    fn scaffold_site(site_dir: &Path) {
        let templates = site_dir.join("templates");
        fs::create_dir_all(&templates).unwrap();
        fs::write(
            templates.join("index.html.tera"),
            "<h1>{{ profile.name }}</h1>",
        )
        .unwrap();

        let css = site_dir.join("assets/css");
        fs::create_dir_all(&css).unwrap();
        fs::write(css.join("style.css"), "body { margin: 0; }").unwrap();
    }

    #[tokio::test]
    async fn test_export_renders_pages_and_copies_assets() -> Result<()> {
        let site = tempdir().unwrap();
        let out = tempdir().unwrap();
        scaffold_site(site.path());
        let out_dir = out.path().join("dist");

        handle_export(ExportArgs {
            out_dir: out_dir.clone(),
            site_dir: site.path().to_path_buf(),
            force: false,
        })
        .await?;

        let index = fs::read_to_string(out_dir.join("index.html"))?;
        assert!(index.contains("Kamal Raj"));
        assert!(out_dir.join("assets/css/style.css").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_export_refuses_non_empty_target() -> Result<()> {
        let site = tempdir().unwrap();
        let out = tempdir().unwrap();
        scaffold_site(site.path());
        fs::write(out.path().join("stale.html"), "old")?;

        let result = handle_export(ExportArgs {
            out_dir: out.path().to_path_buf(),
            site_dir: site.path().to_path_buf(),
            force: false,
        })
        .await;

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("--force"));
        Ok(())
    }

    #[tokio::test]
    async fn test_export_force_overwrites_non_empty_target() -> Result<()> {
        let site = tempdir().unwrap();
        let out = tempdir().unwrap();
        scaffold_site(site.path());
        fs::write(out.path().join("stale.html"), "old")?;

        handle_export(ExportArgs {
            out_dir: out.path().to_path_buf(),
            site_dir: site.path().to_path_buf(),
            force: true,
        })
        .await?;

        assert!(out.path().join("index.html").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_export_missing_site_dir_errors() {
        let out = tempdir().unwrap();
        let result = handle_export(ExportArgs {
            out_dir: out.path().join("dist"),
            site_dir: PathBuf::from("/definitely/not/a/site"),
            force: false,
        })
        .await;
        assert!(result.is_err());
    }
}
