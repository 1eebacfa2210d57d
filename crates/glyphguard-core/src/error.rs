use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("'{}' is not a directory or does not exist.", .path.display())]
    NotADirectory { path: PathBuf },
}
