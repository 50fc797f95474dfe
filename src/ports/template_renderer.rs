use crate::domain::{AppError, ResolvedOptions, TemplateId};

/// Port for rendering the recipe's fixed templates.
pub trait TemplateRenderer {
    /// Render `template` against `options`.
    ///
    /// Fails with `AppError::Template` when a placeholder has no value.
    fn render(&self, template: TemplateId, options: &ResolvedOptions) -> Result<String, AppError>;
}
