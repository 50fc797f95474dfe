//! supervisor-recipe: generate supervisord, program, and init-script
//! configuration for parts declared in a buildout file.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    InstallReceipt, install_at, render_at, resolve_options_at, uninstall_at, update_at,
};
pub use app::config::DEFAULT_BUILDOUT_FILE;
pub use domain::{AppError, Options, ResolvedOptions, TemplateId};
