use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use std::path::Path;

use super::HuntConfig;

/// Embedded defaults, always the lowest-priority layer
pub const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Repository config picked up from the working directory
const LOCAL_CONFIG: &str = "wordhunt.toml";

const ENV_PREFIX: &str = "WORDHUNT_";

impl HuntConfig {
    /// Load the merged configuration
    ///
    /// With `custom_config` set, that file replaces `wordhunt.toml` and must
    /// exist. Environment variables are applied last either way.
    pub fn load(custom_config: Option<&Path>) -> Result<Self> {
        if let Some(path) = custom_config
            && !path.is_file()
        {
            anyhow::bail!("Config file not found: {}", path.display());
        }

        let config: HuntConfig = Self::figment(custom_config)
            .extract()
            .context("Failed to load configuration")?;

        tracing::debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// The layered provider stack behind [`HuntConfig::load`]
    pub fn figment(custom_config: Option<&Path>) -> Figment {
        let figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        let figment = match custom_config {
            Some(path) => figment.merge(Toml::file(path)),
            None => figment.merge(Toml::file(LOCAL_CONFIG)),
        };

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// Render as TOML, the format of the config files
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
