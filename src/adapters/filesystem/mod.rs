//! Filesystem adapter for the `ArtifactWriter` port.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Artifact};
use crate::ports::ArtifactWriter;

/// Writes artifacts directly to their absolute destination paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemWriter;

impl FilesystemWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactWriter for FilesystemWriter {
    fn write(&self, artifact: &Artifact) -> Result<PathBuf, AppError> {
        let path = artifact.path.as_path();
        if let Some(parent) = path.parent() {
            self.create_dir_all(parent)?;
        }

        remove_if_present(path)?;
        fs::write(path, &artifact.content)?;

        if let Some(mode) = artifact.mode {
            set_mode(path, mode)?;
        }

        tracing::info!(path = %path.display(), bytes = artifact.content.len(), "wrote artifact");
        Ok(path.to_path_buf())
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        match fs::create_dir_all(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
            Err(e) => Err(AppError::from(e)),
        }
    }

    fn link_if_absent(&self, target: &Path, link: &Path) -> Result<Option<PathBuf>, AppError> {
        // symlink_metadata sees dangling links too.
        if fs::symlink_metadata(link).is_ok() {
            tracing::debug!(link = %link.display(), "link target already present");
            return Ok(None);
        }

        if let Some(parent) = link.parent() {
            self.create_dir_all(parent)?;
        }

        symlink(target, link)?;
        tracing::info!(link = %link.display(), target = %target.display(), "linked script");
        Ok(Some(link.to_path_buf()))
    }

    fn read_link(&self, link: &Path) -> Result<Option<PathBuf>, AppError> {
        match fs::symlink_metadata(link) {
            Ok(meta) if meta.file_type().is_symlink() => Ok(Some(fs::read_link(link)?)),
            Ok(_) => Ok(None),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::from(e)),
        }
    }
}

fn remove_if_present(path: &Path) -> Result<(), AppError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AppError::from(e)),
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(mode);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<(), AppError> {
    Ok(())
}

#[cfg(unix)]
fn symlink(target: &Path, link: &Path) -> Result<(), AppError> {
    std::os::unix::fs::symlink(target, link).map_err(AppError::from)
}

#[cfg(not(unix))]
fn symlink(target: &Path, link: &Path) -> Result<(), AppError> {
    fs::copy(target, link).map(|_| ()).map_err(AppError::from)
}
