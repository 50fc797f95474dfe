//! Option resolution: caller options merged with computed defaults.

use std::path::Path;

use serde::Serialize;

use crate::domain::{AppError, Layout, Options, RuntimePaths};

/// Buildout-level options: (buildout key, template key, default).
pub const GLOBAL_DEFAULTS: &[(&str, &str, &str)] = &[
    ("supervisor-host", "host", "127.0.0.1"),
    ("supervisor-port", "port", "9001"),
    ("supervisor-username", "username", ""),
    ("supervisor-password", "password", ""),
    ("supervisor-use-monitor", "use_monitor", "true"),
    ("supervisor-chown", "chown", ""),
    ("supervisor-loglevel", "loglevel", "info"),
    ("supervisor-logfile-maxbytes", "logfile_maxbytes", "50MB"),
    ("supervisor-logfile-backups", "logfile_backups", "10"),
    ("supervisor-nodaemon", "nodaemon", "false"),
    ("supervisor-minfds", "minfds", "1024"),
    ("supervisor-minprocs", "minprocs", "200"),
];

/// Part-level program options with constant defaults.
pub const PROGRAM_DEFAULTS: &[(&str, &str)] = &[
    ("user", ""),
    ("priority", "999"),
    ("autostart", "true"),
    ("autorestart", "false"),
    ("redirect_stderr", "false"),
    ("startsecs", "1"),
    ("numprocs", "1"),
    ("stopwaitsecs", "10"),
    ("stopasgroup", "false"),
    ("killasgroup", "true"),
    ("stopsignal", "TERM"),
];

/// Fully resolved option mapping handed to the template renderer.
///
/// Every key a template references is present; values are opaque text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedOptions(Options);

impl ResolvedOptions {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key)
    }

    /// Program section name.
    pub fn program(&self) -> &str {
        self.0.get_or("program", "")
    }

    pub fn options(&self) -> &Options {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Options> for ResolvedOptions {
    fn from(options: Options) -> Self {
        Self(options)
    }
}

/// Merge the part's options with buildout globals and path-derived defaults.
///
/// `name` is the part name and the default program name.
pub fn resolve(
    name: &str,
    part: &Options,
    globals: &Options,
    layout: &Layout,
    runtime: &RuntimePaths,
) -> Result<ResolvedOptions, AppError> {
    let command = part.get("command").unwrap_or_default();
    if command.trim().is_empty() {
        return Err(AppError::config_error(format!(
            "Part '{}' is missing required option 'command'",
            name
        )));
    }

    let program = part.get_or("program", name).to_string();
    if program.is_empty() {
        return Err(AppError::config_error(format!("Part '{}' has an empty 'program' name", name)));
    }
    // The program name becomes a file name under conf.d and the log directory.
    if program.contains(['/', '\\']) || program == "." || program == ".." {
        return Err(AppError::config_error(format!(
            "Part '{}' has an invalid 'program' name '{}': path separators are not allowed",
            name, program
        )));
    }

    // Unrecognized part options ride along untouched.
    let mut resolved = part.clone();

    for (source, key, default) in GLOBAL_DEFAULTS {
        resolved.insert(*key, globals.get_or(source, default));
    }

    for (key, default) in PROGRAM_DEFAULTS {
        resolved.insert(*key, part.get_or(key, default));
    }

    let tmp_dir = layout.tmp_dir();
    let logfile = path_text(&layout.log_dir.join(format!("{}.log", program)));

    resolved.insert("program", program.as_str());
    resolved.insert("command", command);
    resolved.insert(
        "directory",
        part.get("directory").map_or_else(|| path_text(&runtime.bin), str::to_string),
    );
    resolved.insert("stdout_logfile", part.get_or("stdout_logfile", &logfile));
    resolved.insert("stderr_logfile", part.get_or("stderr_logfile", &logfile));
    resolved.insert(
        "environment",
        part.get("environment")
            .map_or_else(|| default_environment(runtime, &tmp_dir), str::to_string),
    );

    resolved.insert("prefix", path_text(&layout.prefix));
    resolved.insert("etc_prefix", path_text(&layout.etc_dir));
    resolved.insert("var_prefix", path_text(&layout.var_dir));
    resolved.insert("log_dir", path_text(&layout.log_dir));
    resolved.insert("tmp_path", path_text(&tmp_dir));
    resolved.insert("env_path", path_text(&runtime.prefix));
    resolved.insert("bin_path", path_text(&runtime.bin));
    resolved.insert("lib_path", path_text(&runtime.lib));
    resolved.insert("config_file", path_text(&layout.main_config_path()));
    resolved.insert("socket_file", path_text(&layout.run_dir().join("supervisor.sock")));
    resolved.insert("pid_file", path_text(&layout.run_dir().join("supervisord.pid")));
    resolved.insert("logfile", path_text(&layout.log_dir.join("supervisord.log")));

    tracing::debug!(part = name, program = %program, keys = resolved.len(), "resolved recipe options");
    Ok(ResolvedOptions(resolved))
}

fn default_environment(runtime: &RuntimePaths, tmp_dir: &Path) -> String {
    format!(
        "PATH=\"/bin:/usr/bin:{}\",LD_LIBRARY_PATH=\"{}\",PYTHON_EGG_CACHE=\"{}\"",
        path_text(&runtime.bin),
        path_text(&runtime.lib),
        path_text(tmp_dir)
    )
}

fn path_text(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
