//! Buildout file model and parser (`buildout.toml`).

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::{AppError, Options};

/// Parsed buildout file.
///
/// Every section is flattened to string options at parse time and never
/// mutated afterward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildoutConfig {
    /// Global `[buildout]` options (`parts-directory`, `supervisor-*`, ...).
    pub buildout: Options,
    /// Named `[deployments.<name>]` sections.
    pub deployments: BTreeMap<String, Options>,
    /// Named `[parts.<name>]` sections, one supervisor recipe each.
    pub parts: BTreeMap<String, Options>,
}

/// One recipe invocation: the part's own options plus buildout globals.
#[derive(Debug, Clone, Copy)]
pub struct RecipePart<'a> {
    pub name: &'a str,
    pub options: &'a Options,
    pub globals: &'a Options,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBuildout {
    #[serde(default)]
    buildout: toml::Table,
    #[serde(default)]
    deployments: BTreeMap<String, toml::Table>,
    #[serde(default)]
    parts: BTreeMap<String, toml::Table>,
}

impl BuildoutConfig {
    /// Options of the part named `name`.
    pub fn part(&self, name: &str) -> Result<&Options, AppError> {
        self.parts.get(name).ok_or_else(|| {
            AppError::config_error(format!(
                "Part '{}' not found. Available: {}",
                name,
                join_names(self.parts.keys())
            ))
        })
    }

    /// Options of the deployment named `name`.
    pub fn deployment(&self, name: &str) -> Result<&Options, AppError> {
        self.deployments.get(name).ok_or_else(|| {
            AppError::config_error(format!(
                "Deployment '{}' not found. Available: {}",
                name,
                join_names(self.deployments.keys())
            ))
        })
    }

    /// Borrowed view of one part together with the buildout globals.
    pub fn recipe_part<'a>(&'a self, name: &'a str) -> Result<RecipePart<'a>, AppError> {
        let options = self.part(name)?;
        Ok(RecipePart { name, options, globals: &self.buildout })
    }

    /// Part names in install order.
    pub fn part_names(&self) -> Vec<String> {
        self.parts.keys().cloned().collect()
    }
}

fn join_names<'a>(names: impl Iterator<Item = &'a String>) -> String {
    let names: Vec<&str> = names.map(String::as_str).collect();
    if names.is_empty() { "(none)".to_string() } else { names.join(", ") }
}

/// Parse buildout file content.
pub fn parse_buildout_content(content: &str) -> Result<BuildoutConfig, AppError> {
    let raw: RawBuildout = toml::from_str(content)?;

    let buildout = flatten_section("buildout", raw.buildout)?;

    let mut deployments = BTreeMap::new();
    for (name, table) in raw.deployments {
        let options = flatten_section(&format!("deployments.{}", name), table)?;
        deployments.insert(name, options);
    }

    let mut parts = BTreeMap::new();
    for (name, table) in raw.parts {
        if name.trim().is_empty() {
            return Err(AppError::Parse {
                what: "buildout file".into(),
                details: "part names must not be empty".into(),
            });
        }
        let options = flatten_section(&format!("parts.{}", name), table)?;
        parts.insert(name, options);
    }

    Ok(BuildoutConfig { buildout, deployments, parts })
}

fn flatten_section(section: &str, table: toml::Table) -> Result<Options, AppError> {
    let mut options = Options::new();
    for (key, value) in table {
        let text = match value {
            toml::Value::String(s) => s,
            toml::Value::Integer(i) => i.to_string(),
            toml::Value::Float(f) => f.to_string(),
            toml::Value::Boolean(b) => b.to_string(),
            toml::Value::Datetime(d) => d.to_string(),
            toml::Value::Array(_) | toml::Value::Table(_) => {
                return Err(AppError::Parse {
                    what: format!("[{}] {}", section, key),
                    details: "expected a string, number, or boolean".into(),
                });
            }
        };
        options.insert(key, text);
    }
    Ok(options)
}
