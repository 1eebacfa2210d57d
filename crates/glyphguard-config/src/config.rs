use serde::Deserialize;

/// Path components that are never traversed, regardless of configuration.
pub const DEFAULT_SKIP: &[&str] = &[".git", "__pycache__"];

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub detectors: DetectorsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Exact path-component names whose subtrees are pruned from the walk.
    #[serde(default = "default_skip")]
    pub skip: Vec<String>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            skip: default_skip(),
        }
    }
}

fn default_skip() -> Vec<String> {
    DEFAULT_SKIP.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct DetectorsConfig {
    /// Also governs the filename check.
    #[serde(default = "default_true")]
    pub cyrillic: bool,
    #[serde(default = "default_true")]
    pub pictographic: bool,
    #[serde(default = "default_true")]
    pub emoticon: bool,
}

impl Default for DetectorsConfig {
    fn default() -> Self {
        Self {
            cyrillic: true,
            pictographic: true,
            emoticon: true,
        }
    }
}

impl DetectorsConfig {
    pub fn any_enabled(&self) -> bool {
        self.cyrillic || self.pictographic || self.emoticon
    }
}

impl Config {
    /// Layer `other` on top of `self`.
    ///
    /// Skip lists are appended (a file can only add to the built-in set),
    /// detector toggles from `other` win.
    pub fn merge(&mut self, other: Config) {
        for name in other.core.skip {
            if !self.core.skip.contains(&name) {
                self.core.skip.push(name);
            }
        }

        self.detectors = other.detectors;
    }
}

fn default_true() -> bool {
    true
}
