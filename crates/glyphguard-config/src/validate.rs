use crate::config::Config;
use anyhow::{bail, Result};

pub fn validate_config(config: &Config) -> Result<()> {
    for name in &config.core.skip {
        if name.is_empty() {
            bail!("Invalid config field 'core.skip': entries must not be empty");
        }
        if name.contains('/') || name.contains('\\') {
            bail!(
                "Invalid config field 'core.skip': '{}' is a path, expected a single directory name",
                name
            );
        }
        if name == "." || name == ".." {
            bail!("Invalid config field 'core.skip': '{}' is not allowed", name);
        }
    }

    if !config.detectors.any_enabled() {
        bail!("Invalid config section 'detectors': at least one detector must be enabled");
    }

    Ok(())
}
