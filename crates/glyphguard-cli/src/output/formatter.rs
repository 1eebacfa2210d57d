use glyphguard_core::Finding;

pub const CLEAN_NOTICE: &str = "::notice:: No Cyrillic or emoji found";
pub const FILE_NAME_MESSAGE: &str = "filename contains Cyrillic";

/// Trim and double every `%` so annotation parsers do not read it as a
/// format specifier.
pub fn escape_message(line: &str) -> String {
    line.trim_matches(is_strippable).replace('%', "%%")
}

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}')
}

pub fn format_annotation(finding: &Finding) -> String {
    match finding.line_number {
        None => format!(
            "::error file={}::{}",
            finding.path.display(),
            FILE_NAME_MESSAGE
        ),
        Some(line) => format!(
            "::error file={},line={}::{}",
            finding.path.display(),
            line,
            escape_message(&finding.line_content)
        ),
    }
}

pub fn print_finding(finding: &Finding) {
    println!("{}", format_annotation(finding));
}

pub fn print_clean_notice() {
    println!("{}", CLEAN_NOTICE);
}
