//! Buildout file loading from disk.

use std::path::Path;

use crate::domain::{AppError, BuildoutConfig, parse_buildout_content};

/// Default buildout file name, resolved against the working directory.
pub const DEFAULT_BUILDOUT_FILE: &str = "buildout.toml";

/// Load and parse the buildout file at `path`.
pub fn load_buildout(path: &Path) -> Result<BuildoutConfig, AppError> {
    if !path.is_file() {
        return Err(AppError::config_error(format!(
            "Buildout file not found: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path)?;
    let config = parse_buildout_content(&content)?;
    tracing::debug!(
        path = %path.display(),
        parts = config.parts.len(),
        deployments = config.deployments.len(),
        "loaded buildout file"
    );
    Ok(config)
}
