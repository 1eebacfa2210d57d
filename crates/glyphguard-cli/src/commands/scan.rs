use crate::output::formatter::{print_clean_notice, print_finding};
use anyhow::Result;
use glyphguard_core::get_detectors;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Returns `true` when anything was found (exit code 1).
pub fn scan(root: &Path, config_path: Option<&PathBuf>) -> Result<bool> {
    let config = crate::config_loader::load_effective_config(config_path)?;
    let detectors = get_detectors(&config);
    debug!(
        root = %root.display(),
        detectors = detectors.len(),
        skip = ?config.core.skip,
        "starting scan"
    );
    for detector in &detectors {
        debug!(
            id = %detector.id,
            kind = %detector.kind,
            description = %detector.description,
            "detector enabled"
        );
    }

    let result = glyphguard_core::scan_path(root, &detectors, &config, print_finding)?;

    if !result.has_findings() {
        print_clean_notice();
    }

    Ok(result.has_findings())
}
