//! Layout delegated to a named deployment section.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, Layout, Options};
use crate::ports::{ArtifactWriter, LayoutStrategy};

/// Deployment collaborator: owns the directory layout and its ownership.
///
/// Reads `prefix` (required), `etc-prefix`, `var-prefix`, `log-prefix`, and
/// `user` from a `[deployments.<name>]` section.
#[derive(Debug, Clone)]
pub struct DeploymentLayout<W: ArtifactWriter> {
    name: String,
    section: Options,
    writer: W,
}

impl<W: ArtifactWriter> DeploymentLayout<W> {
    pub fn new(name: &str, section: &Options, writer: W) -> Self {
        Self { name: name.to_string(), section: section.clone(), writer }
    }

    fn path_option(&self, key: &str) -> Option<PathBuf> {
        self.section.get(key).filter(|v| !v.is_empty()).map(PathBuf::from)
    }
}

impl<W: ArtifactWriter> LayoutStrategy for DeploymentLayout<W> {
    fn layout(&self) -> Result<Layout, AppError> {
        let prefix = self.path_option("prefix").ok_or_else(|| {
            AppError::config_error(format!("Deployment '{}' does not define 'prefix'", self.name))
        })?;
        let etc_dir = self.path_option("etc-prefix").unwrap_or_else(|| prefix.join("etc"));
        let var_dir = self.path_option("var-prefix").unwrap_or_else(|| prefix.join("var"));
        let log_root = self.path_option("log-prefix").unwrap_or_else(|| var_dir.join("log"));
        let user = self.section.get("user").filter(|u| !u.is_empty()).map(str::to_string);

        Ok(Layout { prefix, etc_dir, var_dir, log_dir: log_root.join("supervisor"), user })
    }

    fn install(&self) -> Result<Vec<PathBuf>, AppError> {
        let layout = self.layout()?;
        let dirs = layout.required_dirs();
        for dir in &dirs {
            self.writer.create_dir_all(dir)?;
        }

        if let Some(user) = &layout.user {
            for dir in &dirs {
                change_owner(dir, user)?;
            }
        }

        tracing::info!(deployment = %self.name, prefix = %layout.prefix.display(), "provisioned deployment layout");
        Ok(dirs)
    }
}

#[cfg(unix)]
fn change_owner(path: &Path, user: &str) -> Result<(), AppError> {
    use nix::unistd::{User, chown};

    let account = User::from_name(user)
        .map_err(|e| AppError::Ownership(format!("lookup of user '{}' failed: {}", user, e)))?
        .ok_or_else(|| AppError::Ownership(format!("user '{}' does not exist", user)))?;

    chown(path, Some(account.uid), Some(account.gid)).map_err(|e| {
        AppError::Ownership(format!("chown {} to '{}' failed: {}", path.display(), user, e))
    })
}

#[cfg(not(unix))]
fn change_owner(path: &Path, user: &str) -> Result<(), AppError> {
    tracing::warn!(path = %path.display(), user, "ownership changes are not supported on this platform");
    Ok(())
}
