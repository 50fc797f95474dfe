//! Install command - provisions the layout and writes supervisor artifacts.

use std::path::{Path, PathBuf};

use crate::app::RecipeContext;
use crate::domain::{AppError, Artifact, RecipePart, ResolvedOptions, TemplateId};
use crate::ports::{ArtifactWriter, LayoutStrategy, RuntimeEnvironment, TemplateRenderer};

/// Execute the install sequence for one part.
///
/// Options are resolved before anything is touched, so configuration errors
/// leave the filesystem alone. With `update` set, directory provisioning is
/// skipped and the environment collaborator is told not to provision; every
/// artifact is still rewritten.
///
/// Returns every path written or created, in order.
pub fn execute<L, E, W, R>(
    ctx: &RecipeContext<L, E, W, R>,
    part: &RecipePart<'_>,
    update: bool,
) -> Result<Vec<PathBuf>, AppError>
where
    L: LayoutStrategy,
    E: RuntimeEnvironment,
    W: ArtifactWriter,
    R: TemplateRenderer,
{
    let (layout, options) = super::resolve::execute(ctx, part)?;
    let mut installed = Vec::new();

    if !update {
        installed.extend(ctx.layout().install()?);
    }
    installed.extend(ctx.environment().install(&layout, update)?);

    installed.push(write_template(ctx, TemplateId::MainConfig, layout.main_config_path(), &options)?);
    installed.push(write_template(
        ctx,
        TemplateId::ProgramConfig,
        layout.program_config_path(options.program()),
        &options,
    )?);

    let script = layout.start_stop_script_path();
    installed.push(write_template(ctx, TemplateId::StartStopScript, script.clone(), &options)?);

    if let Some(bin_dir) = part.globals.get("bin-directory").filter(|d| !d.is_empty()) {
        installed.extend(install_entry_points(ctx, Path::new(bin_dir), &script, &options)?);
    }

    tracing::info!(part = part.name, update, paths = installed.len(), "installed supervisor part");
    Ok(installed)
}

/// Link the start/stop script into the shared bin directory and write the
/// `supervisorctl` wrapper next to it.
///
/// Both entry points belong to whichever part owns the `supervisord` link.
/// When the link already points elsewhere, this part leaves the wrapper alone
/// so the two never drive different daemons.
fn install_entry_points<L, E, W, R>(
    ctx: &RecipeContext<L, E, W, R>,
    bin_dir: &Path,
    script: &Path,
    options: &ResolvedOptions,
) -> Result<Vec<PathBuf>, AppError>
where
    L: LayoutStrategy,
    E: RuntimeEnvironment,
    W: ArtifactWriter,
    R: TemplateRenderer,
{
    let mut created = Vec::new();
    let link = bin_dir.join("supervisord");
    if let Some(path) = ctx.writer().link_if_absent(script, &link)? {
        created.push(path);
    } else if ctx.writer().read_link(&link)?.as_deref() != Some(script) {
        tracing::warn!(
            link = %link.display(),
            script = %script.display(),
            "bin entry points belong to another start/stop script; leaving them unchanged"
        );
        return Ok(created);
    }

    created.push(write_template(
        ctx,
        TemplateId::ControlScript,
        bin_dir.join("supervisorctl"),
        options,
    )?);
    Ok(created)
}

fn write_template<L, E, W, R>(
    ctx: &RecipeContext<L, E, W, R>,
    template: TemplateId,
    path: PathBuf,
    options: &ResolvedOptions,
) -> Result<PathBuf, AppError>
where
    L: LayoutStrategy,
    E: RuntimeEnvironment,
    W: ArtifactWriter,
    R: TemplateRenderer,
{
    let content = ctx.templates().render(template, options)?;
    ctx.writer().write(&Artifact::new(path, content, template.mode()))
}
