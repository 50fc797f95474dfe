//! Environment collaborator backed by an isolated package prefix.

use std::path::PathBuf;
use std::process::Command;

use crate::domain::{AppError, Layout, Options, RuntimePaths};
use crate::ports::{ArtifactWriter, RuntimeEnvironment};

/// Package that provides `supervisord` and `supervisorctl`.
pub const SUPERVISOR_PACKAGE: &str = "supervisor";

/// Runtime rooted at `env-path` (part, then buildout), else the layout prefix.
///
/// When `supervisord` is missing, an optional `env-install-command` provisions
/// it; `{prefix}` and `{package}` are substituted before the command is split
/// into words.
#[derive(Debug, Clone)]
pub struct PackageEnvironment<W: ArtifactWriter> {
    env_path: Option<PathBuf>,
    install_command: Option<String>,
    package: String,
    writer: W,
}

impl<W: ArtifactWriter> PackageEnvironment<W> {
    pub fn from_options(part: &Options, globals: &Options, writer: W) -> Self {
        let lookup = |key: &str| {
            part.get(key).or_else(|| globals.get(key)).filter(|v| !v.is_empty()).map(str::to_string)
        };

        Self {
            env_path: lookup("env-path").map(PathBuf::from),
            install_command: lookup("env-install-command"),
            package: SUPERVISOR_PACKAGE.to_string(),
            writer,
        }
    }

    fn run_install_command(&self, template: &str, runtime: &RuntimePaths) -> Result<(), AppError> {
        let prefix = runtime.prefix.to_string_lossy();
        // Placeholders are filled per word so a prefix with spaces stays one argument.
        let words: Vec<String> = shell_words::split(template)
            .map_err(|e| AppError::Parse {
                what: "env-install-command".into(),
                details: e.to_string(),
            })?
            .into_iter()
            .map(|word| word.replace("{prefix}", &prefix).replace("{package}", &self.package))
            .collect();
        let (program, args) =
            words.split_first().ok_or_else(|| AppError::config_error("env-install-command is empty"))?;
        let command_line = shell_words::join(&words);

        tracing::info!(command = %command_line, "installing runtime package");
        let output = Command::new(program).args(args).output().map_err(|e| {
            AppError::EnvironmentInstall(format!("failed to start '{}': {}", program, e))
        })?;

        if !output.status.success() {
            return Err(AppError::EnvironmentInstall(format!(
                "'{}' exited with {}: {}",
                command_line,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}

impl<W: ArtifactWriter> RuntimeEnvironment for PackageEnvironment<W> {
    fn paths(&self, layout: &Layout) -> Result<RuntimePaths, AppError> {
        let prefix = self.env_path.as_deref().unwrap_or(&layout.prefix);
        Ok(RuntimePaths::under_prefix(prefix))
    }

    fn install(&self, layout: &Layout, update: bool) -> Result<Vec<PathBuf>, AppError> {
        if update {
            tracing::debug!("update run: runtime package provisioning skipped");
            return Ok(Vec::new());
        }

        let runtime = self.paths(layout)?;
        self.writer.create_dir_all(&runtime.bin)?;
        self.writer.create_dir_all(&runtime.lib)?;

        if runtime.bin.join("supervisord").exists() {
            tracing::debug!(prefix = %runtime.prefix.display(), "supervisord already installed");
        } else if let Some(command) = &self.install_command {
            self.run_install_command(command, &runtime)?;
        } else {
            tracing::warn!(
                prefix = %runtime.prefix.display(),
                "supervisord not found in runtime and no env-install-command configured"
            );
        }

        Ok(vec![runtime.bin, runtime.lib])
    }
}
