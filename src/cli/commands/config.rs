//! Configuration command implementations

use crate::cli::ConfigCommands;
use crate::cli::Output;
use crate::config::HuntConfig;
use anyhow::Result;
use std::path::Path;

/// Execute config commands
pub fn execute(cmd: ConfigCommands, config_path: Option<&Path>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config_path, output),
        ConfigCommands::Validate => validate(config_path, output),
    }
}

fn show(config_path: Option<&Path>, output: &Output) -> Result<()> {
    let config = HuntConfig::load(config_path)?;
    output.verbose(&format!(
        "Sources: embedded defaults, {}, WORDHUNT_* environment",
        config_path.map_or_else(|| "./wordhunt.toml".to_string(), |p| p.display().to_string())
    ));
    output.report(&config.to_toml()?);
    Ok(())
}

fn validate(config_path: Option<&Path>, output: &Output) -> Result<()> {
    let config = HuntConfig::load(config_path)?;

    match config.validate() {
        Ok(()) => {
            output.success("Configuration is valid");
            Ok(())
        }
        Err(e) => {
            output.error(&e.to_string());
            Err(e.into())
        }
    }
}
