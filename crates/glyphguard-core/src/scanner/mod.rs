pub mod result;
pub mod utils;

use crate::error::ScanError;
use crate::model::{Detector, DetectorKind, Finding};
use crate::scanner::result::ScanResult;
use crate::scanner::utils::{decode_lossy, universal_lines, SkipSet};
use glyphguard_config::Config;
use ignore::WalkBuilder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Walk `root` and report every finding through `on_finding` as soon as it
/// is detected.
///
/// Only a missing or non-directory root is an error. Unreadable entries are
/// counted in the result and otherwise ignored.
pub fn scan_path<F>(
    root: &Path,
    detectors: &[Detector],
    config: &Config,
    mut on_finding: F,
) -> Result<ScanResult, ScanError>
where
    F: FnMut(&Finding),
{
    if !root.is_dir() {
        return Err(ScanError::NotADirectory {
            path: root.to_path_buf(),
        });
    }

    let skip = SkipSet::from_config(config);
    let pruned = Arc::new(AtomicUsize::new(0));

    // Skip-set pruning happens in filter_entry so excluded directories are
    // never descended into. Hidden / .gitignore filtering is disabled: every
    // path outside the skip set is scanned.
    let filter_root = root.to_path_buf();
    let filter_pruned = Arc::clone(&pruned);
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            let rel = entry
                .path()
                .strip_prefix(&filter_root)
                .unwrap_or(entry.path());
            if skip.matches(rel) {
                debug!(path = %entry.path().display(), "pruned by skip set");
                filter_pruned.fetch_add(1, Ordering::Relaxed);
                return false;
            }
            true
        })
        .build();

    let mut result = ScanResult::default();
    let mut findings = 0usize;
    let mut emit = |finding: &Finding| {
        findings += 1;
        on_finding(finding);
    };

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(error = %err, "walk error, skipping entry");
                continue;
            }
        };

        if entry.depth() == 0 {
            continue;
        }
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if file_type.is_dir() {
            continue;
        }
        // Directory symlinks are listed but not followed.
        if file_type.is_symlink() && entry.path().is_dir() {
            continue;
        }

        result.visited_files += 1;
        let path = entry.path();
        let rel_path = path.strip_prefix(root).unwrap_or(path);

        let name = entry.file_name().to_string_lossy();
        if let Some(finding) = scan_file_name(&name, rel_path, detectors) {
            emit(&finding);
        }

        match scan_file(path, rel_path, detectors, &mut emit) {
            Ok(_) => result.scanned_files += 1,
            Err(err) => {
                result.unreadable_files += 1;
                debug!(path = %path.display(), error = %err, "unreadable file, skipping");
            }
        }
    }

    result.findings = findings;
    result.pruned_entries = pruned.load(Ordering::Relaxed);

    info!(
        visited = result.visited_files,
        scanned = result.scanned_files,
        unreadable = result.unreadable_files,
        pruned = result.pruned_entries,
        findings = result.findings,
        "scan finished"
    );

    Ok(result)
}

/// Content check for a single file. Returns the number of findings.
///
/// Fails if the file cannot be opened or is not a regular file. A read error
/// partway through stops the file; findings already reported stand.
pub fn scan_file<F>(
    path: &Path,
    rel_path: &Path,
    detectors: &[Detector],
    on_finding: &mut F,
) -> io::Result<usize>
where
    F: FnMut(&Finding),
{
    // FIFOs and device files would block or stream forever.
    let metadata = std::fs::metadata(path)?;
    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }

    let file = File::open(path)?;
    scan_reader(BufReader::new(file), rel_path, detectors, on_finding)
}

/// Line loop over any reader. Lines are numbered from 1 and decoded lossily;
/// `\r`, `\n` and `\r\n` all end a line.
pub fn scan_reader<R, F>(
    mut reader: R,
    rel_path: &Path,
    detectors: &[Detector],
    on_finding: &mut F,
) -> io::Result<usize>
where
    R: BufRead,
    F: FnMut(&Finding),
{
    let mut buf = Vec::with_capacity(256);
    let mut line_number = 0usize;
    let mut count = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let decoded = decode_lossy(&buf);
        for line in universal_lines(&decoded) {
            line_number += 1;
            if let Some(finding) = scan_line(line, line_number, rel_path, detectors) {
                on_finding(&finding);
                count += 1;
            }
        }
    }

    Ok(count)
}

pub fn scan_content(content: &str, path: &Path, detectors: &[Detector]) -> Vec<Finding> {
    content
        .split_inclusive('\n')
        .flat_map(universal_lines)
        .enumerate()
        .filter_map(|(idx, line)| scan_line(line, idx + 1, path, detectors))
        .collect()
}

/// First detector (in priority order) that matches wins; at most one finding
/// per line.
pub fn scan_line(
    line: &str,
    line_number: usize,
    path: &Path,
    detectors: &[Detector],
) -> Option<Finding> {
    detectors.iter().find_map(|detector| {
        detector.pattern.find(line).map(|mat| Finding {
            path: path.to_path_buf(),
            line_number: Some(line_number),
            line_content: line.to_string(),
            matched_content: mat.as_str().to_string(),
            detector: detector.kind,
        })
    })
}

/// Filename check: only the base name, only the Cyrillic detector.
pub fn scan_file_name(name: &str, rel_path: &Path, detectors: &[Detector]) -> Option<Finding> {
    let detector = detectors
        .iter()
        .find(|d| d.kind == DetectorKind::Cyrillic)?;
    let mat = detector.pattern.find(name)?;

    Some(Finding {
        path: rel_path.to_path_buf(),
        line_number: None,
        line_content: name.to_string(),
        matched_content: mat.as_str().to_string(),
        detector: detector.kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::builtin::get_default_detectors;

    #[test]
    fn test_one_finding_per_line_priority() {
        let detectors = get_default_detectors();
        let findings = scan_content("привет 🚀 :)", Path::new("a.txt"), &detectors);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].detector, DetectorKind::Cyrillic);
        assert_eq!(findings[0].matched_content, "п");
    }

    #[test]
    fn test_pictographic_beats_emoticon() {
        let detectors = get_default_detectors();
        let finding = scan_line("great :) 🎉", 3, Path::new("a.txt"), &detectors).unwrap();
        assert_eq!(finding.detector, DetectorKind::Pictographic);
        assert_eq!(finding.line_number, Some(3));
    }

    #[test]
    fn test_line_numbers_start_at_one() {
        let detectors = get_default_detectors();
        let content = "clean\nstill clean\nsee you :)\n";
        let findings = scan_content(content, Path::new("notes.txt"), &detectors);

        assert_eq!(findings.len(), 1);
        let f = &findings[0];
        assert_eq!(f.line_number, Some(3));
        assert_eq!(f.line_content, "see you :)");
        assert_eq!(f.detector, DetectorKind::Emoticon);
    }

    #[test]
    fn test_every_matching_line_is_reported() {
        let detectors = get_default_detectors();
        let content = "один\ntwo\nтри\n";
        let lines: Vec<_> = scan_content(content, Path::new("n.txt"), &detectors)
            .into_iter()
            .filter_map(|f| f.line_number)
            .collect();
        assert_eq!(lines, vec![1, 3]);
    }

    #[test]
    fn test_scan_reader_lossy_decode_and_crlf() {
        let detectors = get_default_detectors();
        let data: &[u8] = b"\xff\xfe garbage\r\nline \xd0\xb6\r\nok\r\n";
        let mut seen = Vec::new();

        let count = scan_reader(data, Path::new("bin.dat"), &detectors, &mut |f: &Finding| {
            seen.push(f.clone())
        })
        .unwrap();

        assert_eq!(count, 1);
        assert_eq!(seen[0].line_number, Some(2));
        assert_eq!(seen[0].line_content, "line ж");
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        let detectors = get_default_detectors();
        let data: &[u8] = b"ok\r\xd0\xbf\xd1\x80\xd0\xb8\xd0\xb2\xd0\xb5\xd1\x82\r";
        let mut seen = Vec::new();

        scan_reader(data, Path::new("mac.txt"), &detectors, &mut |f: &Finding| {
            seen.push(f.clone())
        })
        .unwrap();

        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].line_number, Some(2));
        assert_eq!(seen[0].line_content, "привет");
    }

    #[test]
    fn test_scan_content_mixed_line_endings() {
        let detectors = get_default_detectors();
        let content = "one\rtwo\r\nthree\nпока\r:)";
        let lines: Vec<_> = scan_content(content, Path::new("mixed.txt"), &detectors)
            .into_iter()
            .map(|f| (f.line_number, f.line_content))
            .collect();

        assert_eq!(
            lines,
            vec![
                (Some(4), "пока".to_string()),
                (Some(5), ":)".to_string())
            ]
        );
    }

    #[test]
    fn test_scan_reader_last_line_without_newline() {
        let detectors = get_default_detectors();
        let data: &[u8] = b"a\nb\n;-D";
        let mut lines = Vec::new();

        scan_reader(data, Path::new("x"), &detectors, &mut |f: &Finding| {
            lines.push(f.line_number)
        })
        .unwrap();

        assert_eq!(lines, vec![Some(3)]);
    }

    #[test]
    fn test_scan_file_name() {
        let detectors = get_default_detectors();
        let rel = Path::new("docs/отчет.md");

        let finding = scan_file_name("отчет.md", rel, &detectors).unwrap();
        assert!(finding.is_file_name());
        assert_eq!(finding.path, rel);

        // Emoji and emoticons in names are not flagged.
        assert!(scan_file_name("party🎉:).txt", Path::new("x"), &detectors).is_none());
    }

    #[test]
    fn test_scan_file_name_follows_cyrillic_toggle() {
        let detectors: Vec<_> = get_default_detectors()
            .into_iter()
            .filter(|d| d.kind != DetectorKind::Cyrillic)
            .collect();
        assert!(scan_file_name("файл.txt", Path::new("файл.txt"), &detectors).is_none());
    }
}
