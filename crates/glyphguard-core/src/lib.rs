pub mod error;
pub mod model;
pub mod rules;
pub mod scanner;

pub use error::ScanError;
pub use model::{Detector, DetectorKind, Finding};
pub use rules::builtin::{get_default_detectors, get_detectors};
pub use scanner::result::ScanResult;
pub use scanner::utils::SkipSet;
pub use scanner::{scan_content, scan_file, scan_file_name, scan_line, scan_path, scan_reader};
