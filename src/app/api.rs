//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::{
    DeploymentLayout, EmbeddedTemplates, FilesystemWriter, PackageEnvironment, StandaloneLayout,
};
use crate::app::{
    RecipeContext,
    commands::{install, render, resolve},
    config::load_buildout,
};
use crate::domain::{BuildoutConfig, RecipePart};
use crate::ports::LayoutStrategy;

pub use crate::domain::{AppError, ResolvedOptions, TemplateId};

type FilesystemContext = RecipeContext<
    Box<dyn LayoutStrategy>,
    PackageEnvironment<FilesystemWriter>,
    FilesystemWriter,
    EmbeddedTemplates,
>;

/// Paths written or created for one part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReceipt {
    pub part: String,
    pub paths: Vec<PathBuf>,
}

/// Choose the layout strategy: the named deployment when the part sets
/// `deployment`, standalone defaults otherwise.
fn layout_strategy(
    config: &BuildoutConfig,
    part: &RecipePart<'_>,
) -> Result<Box<dyn LayoutStrategy>, AppError> {
    match part.options.get("deployment").filter(|d| !d.is_empty()) {
        Some(name) => {
            let section = config.deployment(name)?;
            Ok(Box::new(DeploymentLayout::new(name, section, FilesystemWriter::new())))
        }
        None => Ok(Box::new(StandaloneLayout::from_options(
            part.name,
            part.options,
            part.globals,
            FilesystemWriter::new(),
        ))),
    }
}

/// Create a filesystem-backed `RecipeContext` for a part.
fn create_context(
    config: &BuildoutConfig,
    part: &RecipePart<'_>,
) -> Result<FilesystemContext, AppError> {
    let layout = layout_strategy(config, part)?;
    let environment =
        PackageEnvironment::from_options(part.options, part.globals, FilesystemWriter::new());
    Ok(RecipeContext::new(layout, environment, FilesystemWriter::new(), EmbeddedTemplates::new()?))
}

/// Parts to act on: the requested ones, or every part in name order.
fn selected_parts(config: &BuildoutConfig, parts: &[String]) -> Result<Vec<String>, AppError> {
    if parts.is_empty() {
        let all = config.part_names();
        if all.is_empty() {
            return Err(AppError::config_error("Buildout file defines no [parts.<name>] sections"));
        }
        return Ok(all);
    }

    for name in parts {
        config.part(name)?;
    }
    Ok(parts.to_vec())
}

// =============================================================================
// Install / Update API
// =============================================================================

/// Install the given parts (all parts when empty) from the buildout file at `config_path`.
pub fn install_at(config_path: &Path, parts: &[String]) -> Result<Vec<InstallReceipt>, AppError> {
    run_install(config_path, parts, false)
}

/// Rewrite the artifacts of the given parts without provisioning directories or packages.
pub fn update_at(config_path: &Path, parts: &[String]) -> Result<Vec<InstallReceipt>, AppError> {
    run_install(config_path, parts, true)
}

fn run_install(
    config_path: &Path,
    parts: &[String],
    update: bool,
) -> Result<Vec<InstallReceipt>, AppError> {
    let config = load_buildout(config_path)?;
    let mut receipts = Vec::new();

    for name in selected_parts(&config, parts)? {
        let part = config.recipe_part(&name)?;
        let ctx = create_context(&config, &part)?;
        let paths = install::execute(&ctx, &part, update)?;
        receipts.push(InstallReceipt { part: name.clone(), paths });
    }

    Ok(receipts)
}

/// Uninstalling a part leaves generated files in place; the part must exist.
pub fn uninstall_at(config_path: &Path, part: &str) -> Result<(), AppError> {
    let config = load_buildout(config_path)?;
    config.part(part)?;
    tracing::info!(part, "uninstall leaves generated supervisor files in place");
    Ok(())
}

// =============================================================================
// Inspection API
// =============================================================================

/// Render one template for a part without writing anything.
pub fn render_at(config_path: &Path, part: &str, template: TemplateId) -> Result<String, AppError> {
    let config = load_buildout(config_path)?;
    let part = config.recipe_part(part)?;
    let ctx = create_context(&config, &part)?;
    render::execute(&ctx, &part, template)
}

/// Resolve a part's full option mapping without writing anything.
pub fn resolve_options_at(config_path: &Path, part: &str) -> Result<ResolvedOptions, AppError> {
    let config = load_buildout(config_path)?;
    let part = config.recipe_part(part)?;
    let ctx = create_context(&config, &part)?;
    let (_, options) = resolve::execute(&ctx, &part)?;
    Ok(options)
}
