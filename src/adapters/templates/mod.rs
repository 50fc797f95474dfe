//! Embedded minijinja templates for the supervisor artifacts.

mod asset_collect;
mod template_engine;

use include_dir::{Dir, include_dir};
use minijinja::{Environment, Value};

use crate::domain::{AppError, ResolvedOptions, TemplateId};
use crate::ports::TemplateRenderer;

use self::asset_collect::collect_template_sources;
use self::template_engine::{build_template_environment, render_template_by_name};

static TEMPLATE_ASSET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Renderer backed by templates compiled into the binary.
pub struct EmbeddedTemplates {
    env: Environment<'static>,
}

impl EmbeddedTemplates {
    pub fn new() -> Result<Self, AppError> {
        let sources = collect_template_sources(&TEMPLATE_ASSET_DIR)?;
        let env = build_template_environment(&sources)?;

        for id in TemplateId::ALL {
            if env.get_template(id.asset_name()).is_err() {
                return Err(AppError::Template {
                    template: id.to_string(),
                    details: format!("embedded asset '{}' is missing", id.asset_name()),
                });
            }
        }

        Ok(Self { env })
    }
}

impl TemplateRenderer for EmbeddedTemplates {
    fn render(&self, template: TemplateId, options: &ResolvedOptions) -> Result<String, AppError> {
        let ctx = Value::from_serialize(options);
        render_template_by_name(&self.env, template.asset_name(), &ctx).map_err(|e| match e {
            AppError::Template { details, .. } => {
                AppError::Template { template: template.to_string(), details }
            }
            other => other,
        })
    }
}
