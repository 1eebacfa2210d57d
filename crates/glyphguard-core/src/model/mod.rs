use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectorKind {
    Cyrillic,
    Pictographic,
    Emoticon,
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorKind::Cyrillic => write!(f, "cyrillic"),
            DetectorKind::Pictographic => write!(f, "pictographic"),
            DetectorKind::Emoticon => write!(f, "emoticon"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Detector {
    pub id: String,
    pub kind: DetectorKind,
    pub pattern: regex::Regex,
    pub description: String,
}

impl Detector {
    pub fn is_match(&self, haystack: &str) -> bool {
        self.pattern.is_match(haystack)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Path relative to the scan root.
    pub path: PathBuf,
    /// `None` for a filename match.
    pub line_number: Option<usize>,
    /// Raw line (or base file name), line terminator stripped.
    pub line_content: String,
    pub matched_content: String,
    pub detector: DetectorKind,
}

impl Finding {
    pub fn is_file_name(&self) -> bool {
        self.line_number.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detector_kind_display() {
        assert_eq!(DetectorKind::Cyrillic.to_string(), "cyrillic");
        assert_eq!(DetectorKind::Pictographic.to_string(), "pictographic");
        assert_eq!(DetectorKind::Emoticon.to_string(), "emoticon");
    }
}
