use anyhow::{Context, Result};
use glyphguard_config::{load_config, Config};
use std::path::PathBuf;

/// Built-in defaults, with the explicit config file (if any) layered on top.
/// No file is discovered implicitly.
pub fn load_effective_config(explicit_path: Option<&PathBuf>) -> Result<Config> {
    let mut config = Config::default();

    if let Some(path) = explicit_path {
        let file_config = load_config(path)
            .with_context(|| format!("Failed to load config from {:?}", path))?;
        config.merge(file_config);
    }

    Ok(config)
}
