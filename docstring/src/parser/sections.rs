//! Section header and parameter entry recognition.

use regex::Regex;
use std::sync::LazyLock;

/// Kind of a recognized section header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// `Args:`, `Parameters:` and friends.
    Parameters,
    /// Any other known section (`Returns:`, `Raises:`, ...).
    Other,
}

/// A `name[ (type)]: help` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLine<'a> {
    pub name: &'a str,
    pub type_hint: Option<&'a str>,
    pub help: &'a str,
}

static PATTERNS: LazyLock<SectionPatterns> = LazyLock::new(SectionPatterns::new);

struct SectionPatterns {
    parameters_header: Regex,
    other_header: Regex,
    entry: Regex,
}

impl SectionPatterns {
    fn new() -> Self {
        // All regexes here are compile-time constants. An expect() failure indicates
        // a programmer error in the pattern, not a runtime condition.
        Self {
            parameters_header: Regex::new(
                r"(?i)^(args|arguments|parameters|params|keyword args|keyword arguments)\s*:$",
            )
            .expect("static regex must compile"),
            other_header: Regex::new(
                r"(?i)^(returns?|raises|yields?|usage|examples?|notes?|see also|todo|attributes|warnings?)\s*:$",
            )
            .expect("static regex must compile"),
            // name, optional "(type)", colon, help text
            entry: Regex::new(
                r"^(?P<name>\*{0,2}[A-Za-z_][A-Za-z0-9_.\-]*)\s*(?:\((?P<type>[^:]*?)\))?\s*:(?P<help>.*)$",
            )
            .expect("static regex must compile"),
        }
    }
}

/// Classifies a trimmed line as a section header.
pub fn classify_header(trimmed: &str) -> Option<SectionKind> {
    if PATTERNS.parameters_header.is_match(trimmed) {
        Some(SectionKind::Parameters)
    } else if PATTERNS.other_header.is_match(trimmed) {
        Some(SectionKind::Other)
    } else {
        None
    }
}

/// Parses a trimmed parameter entry line.
pub fn parse_entry(trimmed: &str) -> Option<EntryLine<'_>> {
    let caps = PATTERNS.entry.captures(trimmed)?;
    let name = caps.name("name")?.as_str();
    let type_hint = caps
        .name("type")
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty());
    let help = caps.name("help").map_or("", |m| m.as_str().trim());
    Some(EntryLine {
        name,
        type_hint,
        help,
    })
}
