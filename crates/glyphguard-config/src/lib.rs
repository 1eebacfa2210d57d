pub mod config;
pub mod loader;
pub mod validate;

pub use config::{Config, CoreConfig, DetectorsConfig, DEFAULT_SKIP};
pub use loader::load_config;
