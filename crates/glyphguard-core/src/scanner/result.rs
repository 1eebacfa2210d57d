#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    pub findings: usize,
    pub visited_files: usize,
    pub scanned_files: usize,
    /// Files that could not be opened or are not regular files.
    pub unreadable_files: usize,
    /// Entries removed by the skip set; their subtrees are never listed.
    pub pruned_entries: usize,
}

impl ScanResult {
    pub fn has_findings(&self) -> bool {
        self.findings > 0
    }
}
