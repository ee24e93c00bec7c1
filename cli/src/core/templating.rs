//! # InfraPulse Template System
//!
//! File: cli/src/core/templating.rs
//! Author: Kamal Raj
//! Repository: https://github.com/infrapulses/infrapulse
//!
//! ## Overview
//!
//! This module renders the portfolio pages from the content model using the
//! Tera templating engine. The same rendering path backs both the HTTP
//! server (which renders once at startup and holds the markup in memory) and
//! the static exporter (which renders every template in the site directory
//! to plain HTML files).
//!
//! ## Architecture
//!
//! - `page_context` serializes the [`SiteContent`] model, the derived
//!   category list, and the current year into a `tera::Context`.
//! - `render_page` renders one named template from `<site_dir>/templates`
//!   via `Tera::one_off`.
//! - `render_site_templates` walks `<site_dir>/templates` and renders every
//!   `*.tera` file into a target directory with the extension stripped
//!   (`index.html.tera` becomes `index.html`). Non-template files are copied
//!   unchanged, hidden paths are skipped, and directory structure is
//!   preserved.
//!
//! Tera failures are wrapped in `InfrapulseError::Template` so callers see
//! which template broke and why.
//!
use crate::core::content::SiteContent;
use crate::core::error::{InfrapulseError, Result};
use anyhow::{anyhow, Context};
use chrono::Datelike;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tera::Tera;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Subdirectory of the site dir that holds the Tera templates.
pub const TEMPLATES_SUBDIR: &str = "templates";

/// Subdirectory of the site dir that holds static assets (css, js, images).
pub const ASSETS_SUBDIR: &str = "assets";

/// File extension marking a Tera template, stripped on render.
pub const TEMPLATE_EXT: &str = ".tera";

/// Everything a page template can reference. Serialized in one shot so a
/// typo'd key fails loudly at render time instead of silently emitting
/// nothing.
#[derive(Serialize)]
struct PageContext<'a> {
    profile: &'a crate::core::content::Profile,
    stats: &'a [crate::core::content::Stat],
    skill_groups: &'a [crate::core::content::SkillGroup],
    projects: &'a [crate::core::content::Project],
    categories: Vec<&'a str>,
    year: i32,
}

/// # Build Template Context (`page_context`)
///
/// Serializes the content model into the `tera::Context` every page is
/// rendered with: `profile`, `stats`, `skill_groups`, `projects`, the
/// derived `categories` list, and the current `year` for the footer.
///
/// ## Errors
///
/// Returns an `InfrapulseError::Template` if serialization into a Tera
/// context fails (it cannot for the static model, but the error path is
/// kept explicit rather than unwrapped).
pub fn page_context(content: &SiteContent) -> Result<tera::Context> {
    let page = PageContext {
        profile: &content.profile,
        stats: &content.stats,
        skill_groups: &content.skill_groups,
        projects: &content.projects,
        categories: content.categories(),
        year: chrono::Utc::now().year(),
    };

    tera::Context::from_serialize(&page).map_err(|e| {
        anyhow!(InfrapulseError::Template { source: e })
            .context("Failed to build template context from site content")
    })
}

/// # Render One Page (`render_page`)
///
/// Reads `<site_dir>/templates/<template_name>` and renders it against the
/// content model, returning the finished markup. Autoescaping is on; the
/// content model is plain text and escapes cleanly.
///
/// ## Arguments
///
/// * `site_dir`: Root of the site sources (the directory holding
///   `templates/` and `assets/`).
/// * `template_name`: File name within `templates/`, extension included
///   (e.g. `"index.html.tera"`).
/// * `content`: The content model to render from.
///
/// ## Errors
///
/// Fails if the template file cannot be read, or wraps the Tera error if
/// rendering fails (undefined variable, syntax error).
pub fn render_page(site_dir: &Path, template_name: &str, content: &SiteContent) -> Result<String> {
    let template_path = site_dir.join(TEMPLATES_SUBDIR).join(template_name);

    let raw = fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template '{}'", template_path.display()))?;

    let context = page_context(content)?;

    Tera::one_off(&raw, &context, true).map_err(|e| {
        anyhow!(InfrapulseError::Template { source: e }).context(format!(
            "Tera rendering failed for template '{}'",
            template_path.display()
        ))
    })
}

/// # Render All Site Templates (`render_site_templates`)
///
/// Walks `<site_dir>/templates` and materializes it into `target_dir`:
/// `*.tera` files are rendered against the content model and written with
/// the extension stripped, other files are copied verbatim, and hidden
/// entries (leading `.`) are skipped. Subdirectory structure is preserved.
///
/// ## Arguments
///
/// * `site_dir`: Root of the site sources.
/// * `target_dir`: Directory receiving the rendered output. Created if
///   missing.
/// * `content`: The content model to render from.
///
/// ## Returns
///
/// * `Result<usize>`: The number of templates rendered.
///
/// ## Errors
///
/// Fails if the templates directory is missing, if an output file cannot be
/// written, or if any template fails to render.
pub fn render_site_templates(
    site_dir: &Path,
    target_dir: &Path,
    content: &SiteContent,
) -> Result<usize> {
    let templates_dir = site_dir.join(TEMPLATES_SUBDIR);
    if !templates_dir.is_dir() {
        return Err(InfrapulseError::FileSystem(format!(
            "No '{}' directory under '{}'",
            TEMPLATES_SUBDIR,
            site_dir.display()
        )))?;
    }

    fs::create_dir_all(target_dir).with_context(|| {
        format!("Failed to create target directory '{}'", target_dir.display())
    })?;

    let context = page_context(content)?;
    let mut rendered = 0usize;

    for entry_result in WalkDir::new(&templates_dir) {
        let entry = match entry_result {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Failed to access entry during walk in '{}': {}",
                    templates_dir.display(),
                    e
                );
                continue;
            }
        };
        let src_path = entry.path();
        let relative_path = match src_path.strip_prefix(&templates_dir) {
            Ok(p) => p,
            Err(_) => continue,
        };

        if relative_path
            .components()
            .any(|comp| comp.as_os_str().to_string_lossy().starts_with('.'))
        {
            debug!("Skipping hidden path: {}", src_path.display());
            continue;
        }

        let target_path = target_dir.join(relative_path);

        if src_path.is_dir() {
            fs::create_dir_all(&target_path).with_context(|| {
                format!(
                    "Failed to create target subdirectory '{}'",
                    target_path.display()
                )
            })?;
        } else if src_path.is_file() {
            let file_name = match src_path.file_name() {
                Some(name) => name.to_string_lossy().into_owned(),
                None => continue,
            };

            if file_name.to_lowercase().ends_with(TEMPLATE_EXT) {
                debug!("Rendering template file: {}", src_path.display());
                let raw = fs::read_to_string(src_path).with_context(|| {
                    format!("Failed to read template '{}'", src_path.display())
                })?;
                let markup = Tera::one_off(&raw, &context, true).map_err(|e| {
                    anyhow!(InfrapulseError::Template { source: e }).context(format!(
                        "Tera rendering failed for template '{}'",
                        src_path.display()
                    ))
                })?;

                let final_target_path =
                    target_path.with_file_name(&file_name[..file_name.len() - TEMPLATE_EXT.len()]);
                fs::write(&final_target_path, markup).with_context(|| {
                    format!(
                        "Failed to write rendered page '{}'",
                        final_target_path.display()
                    )
                })?;
                info!(
                    "Rendered '{}' to '{}'",
                    src_path.display(),
                    final_target_path.display()
                );
                rendered += 1;
            } else {
                fs::copy(src_path, &target_path).with_context(|| {
                    format!(
                        "Failed to copy '{}' to '{}'",
                        src_path.display(),
                        target_path.display()
                    )
                })?;
                debug!("Copied '{}'", src_path.display());
            }
        }
    }

    info!("Rendered {} page(s) into '{}'", rendered, target_dir.display());
    Ok(rendered)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_template(site_dir: &Path, name: &str, body: &str) {
        let templates = site_dir.join(TEMPLATES_SUBDIR);
        fs::create_dir_all(&templates).unwrap();
        fs::write(templates.join(name), body).unwrap();
    }

    #[test]
    fn test_page_context_exposes_model_keys() -> Result<()> {
        let context = page_context(&SiteContent::new())?;
        let json = context.into_json();

        assert_eq!(json["profile"]["name"], "Kamal Raj");
        assert_eq!(json["categories"][0], "All");
        assert!(json["projects"].as_array().unwrap().len() == 6);
        assert!(json["year"].as_i64().unwrap() >= 2025);
        Ok(())
    }

    #[test]
    fn test_render_page_substitutes_content() -> Result<()> {
        let site = tempdir().unwrap();
        write_template(
            site.path(),
            "index.html.tera",
            "<h1>{{ profile.name }}</h1><p>{{ stats | length }} stats</p>",
        );

        let html = render_page(site.path(), "index.html.tera", &SiteContent::new())?;
        assert!(html.contains("<h1>Kamal Raj</h1>"));
        assert!(html.contains("4 stats"));
        Ok(())
    }

    #[test]
    fn test_render_page_missing_template_errors() {
        let site = tempdir().unwrap();
        let result = render_page(site.path(), "index.html.tera", &SiteContent::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_render_site_templates_strips_extension_and_skips_hidden() -> Result<()> {
        let site = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_template(site.path(), "index.html.tera", "Hello {{ profile.name }}");
        write_template(site.path(), "404.html.tera", "Lost, {{ profile.name }}?");
        write_template(site.path(), "robots.txt", "User-agent: *");
        write_template(site.path(), ".draft.html.tera", "not published");

        let rendered = render_site_templates(site.path(), out.path(), &SiteContent::new())?;

        assert_eq!(rendered, 2);
        let index = fs::read_to_string(out.path().join("index.html"))?;
        assert_eq!(index, "Hello Kamal Raj");
        assert!(out.path().join("404.html").exists());
        // Plain files are copied through, hidden files never land.
        assert!(out.path().join("robots.txt").exists());
        assert!(!out.path().join(".draft.html").exists());
        Ok(())
    }

    #[test]
    fn test_render_site_templates_invalid_syntax_errors() {
        let site = tempdir().unwrap();
        let out = tempdir().unwrap();
        write_template(site.path(), "broken.html.tera", "Hello {{ profile.name");

        let result = render_site_templates(site.path(), out.path(), &SiteContent::new());
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("Tera rendering failed"));
        assert!(message.contains("broken.html.tera"));
    }

    #[test]
    fn test_render_site_templates_requires_templates_dir() {
        let site = tempdir().unwrap();
        let out = tempdir().unwrap();
        let result = render_site_templates(site.path(), out.path(), &SiteContent::new());
        assert!(result.is_err());
    }
}
