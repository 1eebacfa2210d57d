use crate::config::Config;
use crate::validate::validate_config;
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Read and validate a config file. A missing file is an error: config is
/// only ever loaded from a path the user asked for.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        bail!("Config file not found: {:?}", path);
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {:?}", path))?;

    let config: Config =
        toml::from_str(&content).with_context(|| "Failed to parse TOML config file")?;

    validate_config(&config)?;

    Ok(config)
}
