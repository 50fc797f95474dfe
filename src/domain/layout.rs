//! Installation path context.

use std::path::{Path, PathBuf};

/// Directory layout a recipe installs into.
///
/// Produced once by a layout strategy and read-only afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub prefix: PathBuf,
    pub etc_dir: PathBuf,
    pub var_dir: PathBuf,
    /// Directory holding supervisord and child process logs.
    pub log_dir: PathBuf,
    /// Owner of provisioned directories, when the deployment names one.
    pub user: Option<String>,
}

impl Layout {
    /// Conventional layout below `prefix`: `etc/`, `var/`, `var/log/supervisor/`.
    pub fn under_prefix(prefix: impl Into<PathBuf>) -> Self {
        let prefix = prefix.into();
        let etc_dir = prefix.join("etc");
        let var_dir = prefix.join("var");
        let log_dir = var_dir.join("log").join("supervisor");
        Self { prefix, etc_dir, var_dir, log_dir, user: None }
    }

    pub fn supervisor_etc_dir(&self) -> PathBuf {
        self.etc_dir.join("supervisor")
    }

    /// `<etc>/supervisor/supervisord.conf`
    pub fn main_config_path(&self) -> PathBuf {
        self.supervisor_etc_dir().join("supervisord.conf")
    }

    /// `<etc>/supervisor/conf.d/<program>.conf`
    pub fn program_config_path(&self, program: &str) -> PathBuf {
        self.supervisor_etc_dir().join("conf.d").join(format!("{}.conf", program))
    }

    /// `<etc>/init.d/supervisord`
    pub fn start_stop_script_path(&self) -> PathBuf {
        self.etc_dir.join("init.d").join("supervisord")
    }

    pub fn run_dir(&self) -> PathBuf {
        self.var_dir.join("run")
    }

    pub fn tmp_dir(&self) -> PathBuf {
        self.var_dir.join("tmp")
    }

    /// Directories the recipe needs before writing anything.
    pub fn required_dirs(&self) -> Vec<PathBuf> {
        vec![
            self.run_dir(),
            self.log_dir.clone(),
            self.tmp_dir(),
            self.supervisor_etc_dir().join("conf.d"),
            self.etc_dir.join("init.d"),
        ]
    }
}

/// Paths of the isolated runtime that provides the supervisor binaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimePaths {
    pub prefix: PathBuf,
    pub bin: PathBuf,
    pub lib: PathBuf,
}

impl RuntimePaths {
    pub fn under_prefix(prefix: &Path) -> Self {
        Self { prefix: prefix.to_path_buf(), bin: prefix.join("bin"), lib: prefix.join("lib") }
    }
}
