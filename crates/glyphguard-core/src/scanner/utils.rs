use glyphguard_config::Config;
use std::borrow::Cow;
use std::collections::HashSet;
use std::path::{Component, Path};

/// Directory names excluded from traversal and reporting.
#[derive(Debug, Clone, Default)]
pub struct SkipSet {
    names: HashSet<String>,
}

impl SkipSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.core.skip.iter().cloned())
    }

    /// True when any normal component of `rel_path` is in the set.
    /// Case-sensitive, whole-component comparison.
    pub fn matches(&self, rel_path: &Path) -> bool {
        rel_path.components().any(|c| match c {
            Component::Normal(name) => name.to_str().is_some_and(|n| self.names.contains(n)),
            _ => false,
        })
    }
}

/// Invalid UTF-8 becomes U+FFFD instead of failing the read.
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}

/// Strip a trailing `\n` or `\r\n`.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Split a chunk ending in at most one `\n` into lines, treating `\r`,
/// `\n` and `\r\n` all as line terminators.
///
/// `read_until(b'\n')` keeps a `\r\n` pair inside one chunk, so only a
/// lone `\r` can remain in the body once the terminator is stripped.
pub fn universal_lines(chunk: &str) -> impl Iterator<Item = &str> {
    strip_line_ending(chunk).split('\r')
}
