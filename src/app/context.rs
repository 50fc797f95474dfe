use crate::ports::{ArtifactWriter, LayoutStrategy, RuntimeEnvironment, TemplateRenderer};

/// Collaborators one recipe part runs against.
pub struct RecipeContext<L, E, W, R>
where
    L: LayoutStrategy,
    E: RuntimeEnvironment,
    W: ArtifactWriter,
    R: TemplateRenderer,
{
    layout: L,
    environment: E,
    writer: W,
    templates: R,
}

impl<L, E, W, R> RecipeContext<L, E, W, R>
where
    L: LayoutStrategy,
    E: RuntimeEnvironment,
    W: ArtifactWriter,
    R: TemplateRenderer,
{
    /// Create a new recipe context.
    pub fn new(layout: L, environment: E, writer: W, templates: R) -> Self {
        Self { layout, environment, writer, templates }
    }

    /// Get the path-resolution strategy.
    pub fn layout(&self) -> &L {
        &self.layout
    }

    /// Get the environment collaborator.
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Get the artifact writer.
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Get the template renderer.
    pub fn templates(&self) -> &R {
        &self.templates
    }
}
