use thiserror::Error;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV_VAR: &str = "SUPERVISOR_RECIPE_LOG";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("init logging error: `{0}`")]
    TryInitError(String),
}

pub struct Logging;

impl Logging {
    /// Install the global subscriber on stderr.
    ///
    /// `verbosity` 0 logs warnings, 1 adds info, 2 and above add debug.
    /// `SUPERVISOR_RECIPE_LOG` directives take precedence.
    pub fn try_init(verbosity: u8) -> Result<(), LoggingError> {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(default_level(verbosity).into())
                    .with_env_var(LOG_ENV_VAR)
                    .from_env_lossy(),
            )
            .try_init()
            .map_err(|_| {
                LoggingError::TryInitError("unable to set global logging subscriber".to_string())
            })
    }
}

fn default_level(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}
