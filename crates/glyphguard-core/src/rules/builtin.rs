use crate::model::{Detector, DetectorKind};
use glyphguard_config::Config;
use regex::Regex;
use std::sync::OnceLock;

pub const DETECTOR_ID_CYRILLIC: &str = "glyph.cyrillic";
pub const DETECTOR_ID_PICTOGRAPHIC: &str = "glyph.pictographic";
pub const DETECTOR_ID_EMOTICON: &str = "glyph.emoticon";

static DEFAULT_DETECTORS: OnceLock<Vec<Detector>> = OnceLock::new();

/// Built-in detectors in priority order: the first one that matches a line
/// is the one reported.
pub fn get_default_detectors() -> Vec<Detector> {
    DEFAULT_DETECTORS
        .get_or_init(|| {
            vec![
                Detector {
                    id: DETECTOR_ID_CYRILLIC.to_string(),
                    kind: DetectorKind::Cyrillic,
                    pattern: Regex::new(r"\p{Cyrillic}").expect("Valid Regex"),
                    description: "Character in the Cyrillic script".to_string(),
                },
                Detector {
                    id: DETECTOR_ID_PICTOGRAPHIC.to_string(),
                    kind: DetectorKind::Pictographic,
                    pattern: Regex::new(r"\p{Extended_Pictographic}").expect("Valid Regex"),
                    description: "Emoji or pictographic symbol (Extended_Pictographic)"
                        .to_string(),
                },
                Detector {
                    id: DETECTOR_ID_EMOTICON.to_string(),
                    kind: DetectorKind::Emoticon,
                    // eye, optional nose, mouth
                    pattern: Regex::new(r"[:;=8][\-~^]?[)(DPp]").expect("Valid Regex"),
                    description: "ASCII emoticon such as :) or ;-D".to_string(),
                },
            ]
        })
        .clone()
}

pub fn get_detectors(config: &Config) -> Vec<Detector> {
    let toggles = &config.detectors;
    get_default_detectors()
        .into_iter()
        .filter(|d| match d.kind {
            DetectorKind::Cyrillic => toggles.cyrillic,
            DetectorKind::Pictographic => toggles.pictographic,
            DetectorKind::Emoticon => toggles.emoticon,
        })
        .collect()
}
