use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "glyphguard", version)]
#[command(
    about = "Flag Cyrillic text, emoji and emoticons in file names and contents",
    long_about = None
)]
pub struct Cli {
    /// Directory to scan
    #[arg(value_name = "directory-to-scan")]
    pub directory: PathBuf,

    /// Path to a TOML config file (extra skip entries, detector toggles)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}
