//! Isolated runtime that provides the supervisor binaries.

use std::path::PathBuf;

use crate::domain::{AppError, Layout, RuntimePaths};

/// Port for the environment collaborator.
pub trait RuntimeEnvironment {
    /// Runtime paths; `layout` supplies the fallback prefix.
    fn paths(&self, layout: &Layout) -> Result<RuntimePaths, AppError>;

    /// Ensure the runtime package is present.
    ///
    /// With `update` set, implementations must not provision anything.
    fn install(&self, layout: &Layout, update: bool) -> Result<Vec<PathBuf>, AppError>;
}

impl<T: RuntimeEnvironment + ?Sized> RuntimeEnvironment for Box<T> {
    fn paths(&self, layout: &Layout) -> Result<RuntimePaths, AppError> {
        (**self).paths(layout)
    }

    fn install(&self, layout: &Layout, update: bool) -> Result<Vec<PathBuf>, AppError> {
        (**self).install(layout, update)
    }
}
