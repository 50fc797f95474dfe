//! Path-resolution strategy for a recipe part.

use std::path::PathBuf;

use crate::domain::{AppError, Layout};

/// Port deciding where a part installs and provisioning that layout.
///
/// Implemented by the standalone defaults and by deployment delegation.
pub trait LayoutStrategy {
    /// Resolve the directory layout. Fails when no prefix can be determined.
    fn layout(&self) -> Result<Layout, AppError>;

    /// Create the directory layout (and apply ownership where supported).
    ///
    /// Returns the directories created or confirmed.
    fn install(&self) -> Result<Vec<PathBuf>, AppError>;
}

impl<T: LayoutStrategy + ?Sized> LayoutStrategy for Box<T> {
    fn layout(&self) -> Result<Layout, AppError> {
        (**self).layout()
    }

    fn install(&self) -> Result<Vec<PathBuf>, AppError> {
        (**self).install()
    }
}
