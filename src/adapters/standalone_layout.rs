//! Layout derived from buildout defaults when no deployment is named.

use std::path::PathBuf;

use crate::domain::{AppError, Layout, Options};
use crate::ports::{ArtifactWriter, LayoutStrategy};

/// Installs a part below its own prefix (`<parts-directory>/<part>` by default).
#[derive(Debug, Clone)]
pub struct StandaloneLayout<W: ArtifactWriter> {
    part: String,
    prefix: Option<PathBuf>,
    writer: W,
}

impl<W: ArtifactWriter> StandaloneLayout<W> {
    /// Prefix comes from the part's `prefix` option, else the buildout `parts-directory`.
    pub fn from_options(part_name: &str, part: &Options, globals: &Options, writer: W) -> Self {
        let prefix = part
            .get("prefix")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                globals
                    .get("parts-directory")
                    .filter(|p| !p.is_empty())
                    .map(|dir| PathBuf::from(dir).join(part_name))
            });

        Self { part: part_name.to_string(), prefix, writer }
    }
}

impl<W: ArtifactWriter> LayoutStrategy for StandaloneLayout<W> {
    fn layout(&self) -> Result<Layout, AppError> {
        let prefix = self.prefix.as_ref().ok_or_else(|| {
            AppError::config_error(format!(
                "Cannot determine prefix for part '{}': set 'prefix' on the part or \
                 'parts-directory' in [buildout]",
                self.part
            ))
        })?;
        Ok(Layout::under_prefix(prefix))
    }

    fn install(&self) -> Result<Vec<PathBuf>, AppError> {
        let layout = self.layout()?;
        let dirs = layout.required_dirs();
        for dir in &dirs {
            self.writer.create_dir_all(dir)?;
        }
        tracing::info!(part = %self.part, prefix = %layout.prefix.display(), "provisioned standalone layout");
        Ok(dirs)
    }
}
