//! Render one template without touching the filesystem.

use crate::app::RecipeContext;
use crate::domain::{AppError, RecipePart, TemplateId};
use crate::ports::{ArtifactWriter, LayoutStrategy, RuntimeEnvironment, TemplateRenderer};

pub fn execute<L, E, W, R>(
    ctx: &RecipeContext<L, E, W, R>,
    part: &RecipePart<'_>,
    template: TemplateId,
) -> Result<String, AppError>
where
    L: LayoutStrategy,
    E: RuntimeEnvironment,
    W: ArtifactWriter,
    R: TemplateRenderer,
{
    let (_, options) = super::resolve::execute(ctx, part)?;
    ctx.templates().render(template, &options)
}
