use clap::ValueEnum;
use pagecraft_document::{ComponentCatalog, FieldDescriptor, RawTrait};
use pagecraft_validator::ValidationOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "pagecraft.config.json";

/// How reports are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Pagecraft configuration file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Default output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[serde(default)]
    pub strict: bool,

    /// Component types whose own fields are not validated
    #[serde(default)]
    pub skip_types: Vec<String>,

    /// Custom component types and their traits, registered over the built-ins
    #[serde(default)]
    pub components: BTreeMap<String, Vec<RawTrait>>,
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = Self::path_in(cwd);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content).map_err(|e| {
                anyhow::anyhow!("Invalid {}: {}", config_path.display(), e)
            })?;
            tracing::debug!(path = %config_path.display(), "Loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn path_in(cwd: &Path) -> PathBuf {
        cwd.join(DEFAULT_CONFIG_NAME)
    }

    /// Built-in component types plus the ones declared here
    pub fn catalog(&self) -> ComponentCatalog {
        let mut catalog = ComponentCatalog::builtin();

        for (type_name, traits) in &self.components {
            let fields: Vec<FieldDescriptor> = traits
                .iter()
                .filter_map(|raw_trait| {
                    let descriptor = raw_trait.to_descriptor();
                    if descriptor.is_none() {
                        tracing::warn!(component_type = %type_name, "Ignoring configured trait without a name");
                    }
                    descriptor
                })
                .collect();
            catalog.register(type_name.clone(), fields);
        }

        catalog
    }

    pub fn validation_options(&self, strict: bool) -> ValidationOptions {
        ValidationOptions {
            treat_warnings_as_errors: strict || self.strict,
            skip_types: self.skip_types.iter().cloned().collect(),
        }
    }
}
