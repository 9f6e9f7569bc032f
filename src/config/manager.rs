use super::{
    mutation::MutationConfig,
    search::SearchConfig,
    traits::ConfigSection,
};
use crate::error::EgolutionError;
use crate::types::Variant;
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENV_PREFIX: &str = "EGOLUTION";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub mutation: MutationConfig,
}

impl AppConfig {
    pub fn for_variant(variant: Variant) -> Self {
        Self {
            search: SearchConfig::for_variant(variant),
            mutation: MutationConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), EgolutionError> {
        self.search.validate()?;
        self.mutation.validate()?;
        Ok(())
    }
}

/// Owns the active configuration.
///
/// Sources are layered: built-in defaults, then an optional TOML file, then
/// `EGOLUTION__<SECTION>__<FIELD>` environment variables.
pub struct ConfigManager {
    config: AppConfig,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EgolutionError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(EgolutionError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path).format(::config::FileFormat::Toml))
            .add_source(Self::environment())
            .build()?;
        self.install(settings.try_deserialize()?)
    }

    /// Apply environment overrides on top of the defaults only.
    pub fn load_from_env(&mut self) -> Result<(), EgolutionError> {
        let settings = ::config::Config::builder()
            .add_source(Self::environment())
            .build()?;
        self.install(settings.try_deserialize()?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), EgolutionError> {
        let toml_str = toml::to_string_pretty(&self.config)?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), EgolutionError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        self.install(candidate)
    }

    fn install(&mut self, config: AppConfig) -> Result<(), EgolutionError> {
        config.validate()?;
        log::debug!(
            "Loaded [{}] and [{}] config for variant {}",
            SearchConfig::section_name(),
            MutationConfig::section_name(),
            config.search.variant.name()
        );
        self.config = config;
        Ok(())
    }

    fn environment() -> ::config::Environment {
        ::config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
    }
}
