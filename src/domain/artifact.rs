//! Rendered artifacts and the templates that produce them.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::AppError;

/// Permission mode for generated scripts (`rwxr-xr-x`).
pub const EXECUTABLE_MODE: u32 = 0o755;

/// The fixed set of templates the recipe renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    MainConfig,
    ProgramConfig,
    StartStopScript,
    ControlScript,
}

impl TemplateId {
    pub const ALL: [TemplateId; 4] = [
        TemplateId::MainConfig,
        TemplateId::ProgramConfig,
        TemplateId::StartStopScript,
        TemplateId::ControlScript,
    ];

    /// Stable identifier used on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::MainConfig => "main-config",
            TemplateId::ProgramConfig => "program-config",
            TemplateId::StartStopScript => "start-stop-script",
            TemplateId::ControlScript => "control-script",
        }
    }

    /// Name of the embedded template asset.
    pub fn asset_name(&self) -> &'static str {
        match self {
            TemplateId::MainConfig => "supervisord.conf.j2",
            TemplateId::ProgramConfig => "program.conf.j2",
            TemplateId::StartStopScript => "supervisord.j2",
            TemplateId::ControlScript => "supervisorctl.j2",
        }
    }

    /// Scripts are installed executable; configs keep the default mode.
    pub fn mode(&self) -> Option<u32> {
        match self {
            TemplateId::StartStopScript | TemplateId::ControlScript => Some(EXECUTABLE_MODE),
            TemplateId::MainConfig | TemplateId::ProgramConfig => None,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL.into_iter().find(|id| id.as_str() == s).ok_or_else(|| {
            let known: Vec<&str> = TemplateId::ALL.iter().map(TemplateId::as_str).collect();
            AppError::config_error(format!(
                "Unknown template '{}'. Available: {}",
                s,
                known.join(", ")
            ))
        })
    }
}

/// A file the recipe creates or overwrites in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
    pub mode: Option<u32>,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>, mode: Option<u32>) -> Self {
        Self { path: path.into(), content: content.into(), mode }
    }
}
