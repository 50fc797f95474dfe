//! Option resolution against a recipe context.

use crate::app::RecipeContext;
use crate::domain::{AppError, Layout, RecipePart, ResolvedOptions, resolve};
use crate::ports::{ArtifactWriter, LayoutStrategy, RuntimeEnvironment, TemplateRenderer};

/// Resolve the layout and the part's full option mapping without side effects.
pub fn execute<L, E, W, R>(
    ctx: &RecipeContext<L, E, W, R>,
    part: &RecipePart<'_>,
) -> Result<(Layout, ResolvedOptions), AppError>
where
    L: LayoutStrategy,
    E: RuntimeEnvironment,
    W: ArtifactWriter,
    R: TemplateRenderer,
{
    let layout = ctx.layout().layout()?;
    let runtime = ctx.environment().paths(&layout)?;
    let options = resolve(part.name, part.options, part.globals, &layout, &runtime)?;
    Ok((layout, options))
}
