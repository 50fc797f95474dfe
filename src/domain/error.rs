use std::io;

use thiserror::Error;

/// Library-wide error type for recipe operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required value missing or unresolvable.
    #[error("{0}")]
    Configuration(String),

    /// Template placeholder unresolved or template malformed.
    #[error("Template '{template}' failed: {details}")]
    Template { template: String, details: String },

    /// Buildout file could not be interpreted.
    #[error("Failed to parse {what}: {details}")]
    Parse { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Environment collaborator could not provision the runtime package.
    #[error("Environment install failed: {0}")]
    EnvironmentInstall(String),

    /// Ownership of a provisioned directory could not be changed.
    #[error("Ownership change failed: {0}")]
    Ownership(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
