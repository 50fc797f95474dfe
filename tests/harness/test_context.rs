//! Shared testing harness for `supervisor-recipe` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory holding a buildout file and its parts.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory CLI invocations run in.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// `parts-directory` used by [`TestContext::write_default_buildout`].
    pub(crate) fn parts_dir(&self) -> PathBuf {
        self.work_dir.join("parts")
    }

    /// Shared `bin-directory` used by [`TestContext::write_default_buildout`].
    pub(crate) fn bin_dir(&self) -> PathBuf {
        self.work_dir.join("bin")
    }

    /// Prefix of a part installed under the default parts directory.
    pub(crate) fn part_prefix(&self, part: &str) -> PathBuf {
        self.parts_dir().join(part)
    }

    /// Write `buildout.toml` in the work directory.
    pub(crate) fn write_buildout(&self, body: &str) -> PathBuf {
        let path = self.work_dir.join("buildout.toml");
        fs::write(&path, body).expect("Failed to write buildout file");
        path
    }

    /// One `web` part running `/bin/echo hi`, with parts and bin directories
    /// inside the work directory.
    pub(crate) fn write_default_buildout(&self) -> PathBuf {
        self.write_buildout(&format!(
            r#"[buildout]
parts-directory = "{}"
bin-directory = "{}"

[parts.web]
command = "/bin/echo hi"
"#,
            self.parts_dir().display(),
            self.bin_dir().display()
        ))
    }

    /// Read a file below the work directory.
    pub(crate) fn read(&self, path: impl AsRef<Path>) -> String {
        let path = self.work_dir.join(path);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("supervisor-recipe").expect("Failed to locate supervisor-recipe binary");
        cmd.current_dir(&self.work_dir).env_remove("SUPERVISOR_RECIPE_LOG");
        cmd
    }
}
