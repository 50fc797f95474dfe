use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::domain::AppError;

use super::asset_collect::TemplateSource;

/// Build an environment that substitutes text verbatim.
///
/// Undefined variables are errors and nothing is auto-escaped.
pub fn build_template_environment(
    sources: &[TemplateSource],
) -> Result<Environment<'static>, AppError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    for source in sources {
        env.add_template(source.name, source.content).map_err(|e| AppError::Template {
            template: source.name.to_string(),
            details: format!("failed to register: {}", e),
        })?;
    }

    Ok(env)
}

pub fn render_template_by_name(
    env: &Environment<'_>,
    template_name: &str,
    ctx: &Value,
) -> Result<String, AppError> {
    let template = env.get_template(template_name).map_err(|e| AppError::Template {
        template: template_name.to_string(),
        details: format!("failed to load: {}", e),
    })?;

    template.render(ctx).map_err(|e| AppError::Template {
        template: template_name.to_string(),
        details: e.to_string(),
    })
}
