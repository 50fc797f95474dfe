//! Filesystem side effects of an install.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, Artifact};

/// Port for writing rendered artifacts.
pub trait ArtifactWriter {
    /// Replace any file at `artifact.path` with the artifact content.
    ///
    /// Creates parent directories and applies `artifact.mode` after writing.
    fn write(&self, artifact: &Artifact) -> Result<PathBuf, AppError>;

    /// Create a directory and all parent directories. Existing ones are fine.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Symlink `link` to `target` unless something already exists at `link`.
    ///
    /// Returns `Some(link)` when a link was created.
    fn link_if_absent(&self, target: &Path, link: &Path) -> Result<Option<PathBuf>, AppError>;

    /// Target of the symlink at `link`, or `None` when `link` is missing or not a symlink.
    fn read_link(&self, link: &Path) -> Result<Option<PathBuf>, AppError>;
}
