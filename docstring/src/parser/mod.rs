//! Documentation string parser.
//!
//! The parser is a small line scanner with explicit states:
//!
//! - `BeforeHeader`: nothing seen yet; the first non-blank line becomes
//!   the summary.
//! - `InDescription`: free text collected until a section header.
//! - `InParameterSection`: inside `Args:`; waiting for an entry line.
//! - `InContinuation`: an entry is open; deeper-indented lines extend it.
//! - `InOtherSection`: inside a section this parser does not use
//!   (`Returns:`, `Raises:`, ...). A later `Args:` header may still follow.
//! - `Done`: the parameter section ended; the rest is ignored.
//!
//! Nothing here fails. Text the scanner cannot place is skipped and
//! recorded in [`DocParser::warnings`].
//!
//! The primary entry point is [`DocParser::new`] followed by
//! [`DocParser::parse`]; most callers should use
//! [`parse_docstring`](crate::parse_docstring) instead.

mod normalize;
mod sections;

use docargs_core::{DocRecord, ParamDoc};
use tracing::{debug, trace};

pub use normalize::{collapse_blank_lines, dedent, indent_width, normalize_docstring};
pub use sections::{EntryLine, SectionKind, classify_header, parse_entry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeHeader,
    InDescription,
    InParameterSection { entry_indent: Option<usize> },
    InContinuation { entry_indent: usize },
    InOtherSection,
    Done,
}

/// Entry being assembled from its first line and continuation lines.
#[derive(Debug)]
struct OpenEntry {
    name: String,
    type_hint: Option<String>,
    help: Vec<String>,
}

impl OpenEntry {
    fn from_line(entry: &EntryLine<'_>) -> Self {
        Self {
            name: entry.name.to_string(),
            type_hint: entry.type_hint.map(str::to_string),
            help: if entry.help.is_empty() {
                Vec::new()
            } else {
                vec![entry.help.to_string()]
            },
        }
    }

    fn into_doc(self) -> (String, ParamDoc) {
        let doc = ParamDoc {
            help: self.help.join(" ").trim().to_string(),
            type_hint: self.type_hint,
        };
        (self.name, doc)
    }
}

/// Parser for a single documentation string.
pub struct DocParser {
    lines: Vec<String>,
    warnings: Vec<String>,
}

impl DocParser {
    /// Creates a parser for the given raw documentation text.
    pub fn new(raw: &str) -> Self {
        Self {
            lines: normalize_docstring(raw),
            warnings: Vec::new(),
        }
    }

    /// Non-fatal findings from the last [`parse`](Self::parse) call.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Parses the documentation into a [`DocRecord`].
    ///
    /// Calling this repeatedly yields equal records.
    pub fn parse(&mut self) -> DocRecord {
        self.warnings.clear();

        let mut record = DocRecord::default();
        let mut description: Vec<String> = Vec::new();
        let mut open: Option<OpenEntry> = None;
        let mut state = ScanState::BeforeHeader;

        for (index, line) in self.lines.iter().enumerate() {
            let trimmed = line.trim();
            let indent = indent_width(line);

            state = match state {
                ScanState::BeforeHeader => {
                    if trimmed.is_empty() {
                        ScanState::BeforeHeader
                    } else if let Some(kind) = classify_header(trimmed) {
                        enter_section(kind)
                    } else {
                        record.summary = trimmed.to_string();
                        ScanState::InDescription
                    }
                }
                ScanState::InDescription => match classify_header(trimmed) {
                    Some(kind) => enter_section(kind),
                    None => {
                        description.push(line.clone());
                        ScanState::InDescription
                    }
                },
                ScanState::InOtherSection => match classify_header(trimmed) {
                    Some(SectionKind::Parameters) => enter_section(SectionKind::Parameters),
                    _ => ScanState::InOtherSection,
                },
                ScanState::InParameterSection { entry_indent } => {
                    if trimmed.is_empty() {
                        state
                    } else {
                        scan_parameter_line(
                            &mut self.warnings,
                            index,
                            trimmed,
                            indent,
                            entry_indent,
                            &mut open,
                            &mut record,
                        )
                    }
                }
                ScanState::InContinuation { entry_indent } => {
                    if trimmed.is_empty() {
                        state
                    } else if indent > entry_indent {
                        if let Some(entry) = open.as_mut() {
                            entry.help.push(trimmed.to_string());
                        }
                        state
                    } else {
                        scan_parameter_line(
                            &mut self.warnings,
                            index,
                            trimmed,
                            indent,
                            Some(entry_indent),
                            &mut open,
                            &mut record,
                        )
                    }
                }
                ScanState::Done => break,
            };
        }

        commit(&mut open, &mut record);
        record.description = collapse_blank_lines(&dedent(&description));

        debug!(
            summary = %record.summary,
            parameters = record.parameters.len(),
            warnings = self.warnings.len(),
            "parsed documentation"
        );
        record
    }
}

/// Handles a non-blank line inside the parameter section that is not a
/// continuation of the open entry.
fn scan_parameter_line(
    warnings: &mut Vec<String>,
    index: usize,
    trimmed: &str,
    indent: usize,
    entry_indent: Option<usize>,
    open: &mut Option<OpenEntry>,
    record: &mut DocRecord,
) -> ScanState {
    match classify_header(trimmed) {
        Some(SectionKind::Parameters) => {
            commit(open, record);
            trace!(line = index, "repeated parameter header skipped");
            return ScanState::InParameterSection { entry_indent };
        }
        Some(SectionKind::Other) => {
            commit(open, record);
            return ScanState::Done;
        }
        None => {}
    }

    let at_entry_level = entry_indent.is_none_or(|expected| indent == expected);
    if at_entry_level {
        if let Some(entry) = parse_entry(trimmed) {
            commit(open, record);
            *open = Some(OpenEntry::from_line(&entry));
            return ScanState::InContinuation {
                entry_indent: indent,
            };
        }
    }

    if let Some(expected) = entry_indent {
        if indent > expected {
            trace!(line = index, "continuation line without an entry ignored");
            warnings.push(format!(
                "line {}: continuation without a parameter entry ignored: {trimmed}",
                index + 1
            ));
            return ScanState::InParameterSection { entry_indent };
        }
    }

    commit(open, record);
    if entry_indent.is_none() {
        warnings.push(format!(
            "line {}: parameter section has no entries before: {trimmed}",
            index + 1
        ));
    }
    ScanState::Done
}

fn enter_section(kind: SectionKind) -> ScanState {
    match kind {
        SectionKind::Parameters => ScanState::InParameterSection { entry_indent: None },
        SectionKind::Other => ScanState::InOtherSection,
    }
}

/// Stores the open entry; a repeated name replaces the earlier one.
fn commit(open: &mut Option<OpenEntry>, record: &mut DocRecord) {
    if let Some(entry) = open.take() {
        let (name, doc) = entry.into_doc();
        if record.parameters.insert(name.clone(), doc).is_some() {
            debug!(parameter = %name, "parameter documented twice; last entry wins");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> DocRecord {
        DocParser::new(raw).parse()
    }

    #[test]
    fn test_empty_input_yields_empty_record() {
        assert!(parse("").is_empty());
        assert!(parse("   \n\n  ").is_empty());
    }

    #[test]
    fn test_summary_only() {
        let doc = parse("Generate a checker.");
        assert_eq!(doc.summary, "Generate a checker.");
        assert_eq!(doc.description, "");
        assert!(doc.parameters.is_empty());
    }

    #[test]
    fn test_description_stops_at_args_header() {
        let doc = parse(
            "Parse a docstring.

            Parse a docstring and extract three components; headline, description,
            and map of arguments to help texts.

            Args:
              func: function object

            Returns:
              a dictionary.
            ",
        );
        assert_eq!(doc.summary, "Parse a docstring.");
        assert_eq!(
            doc.description,
            "Parse a docstring and extract three components; headline, description,\nand map of arguments to help texts."
        );
        assert_eq!(doc.parameters.names(), vec!["func"]);
        assert_eq!(doc.parameters.get("func").unwrap().help, "function object");
    }

    #[test]
    fn test_continuation_lines_join_with_single_spaces() {
        let doc = parse(
            "Test docstring.

            Args:
              one: definition of one.
                More detail about one.
                  Even more.
              two: definition of two.
            ",
        );
        assert_eq!(
            doc.parameters.get("one").unwrap().help,
            "definition of one. More detail about one. Even more."
        );
        assert_eq!(doc.parameters.get("two").unwrap().help, "definition of two.");
    }

    #[test]
    fn test_entry_help_may_start_on_next_line() {
        let doc = parse(
            "Summary.

            Args:
              path (str):
                where to write
            ",
        );
        let path = doc.parameters.get("path").unwrap();
        assert_eq!(path.help, "where to write");
        assert_eq!(path.type_hint.as_deref(), Some("str"));
    }

    #[test]
    fn test_header_without_entries() {
        let doc = parse("Summary.\n\nArgs:\n");
        assert!(doc.parameters.is_empty());
        assert_eq!(doc.description, "");
    }

    #[test]
    fn test_unmatched_line_ends_section() {
        let mut parser = DocParser::new(
            "Summary.

            Args:
              a: first
            That is all.
              b: never seen
            ",
        );
        let doc = parser.parse();
        assert_eq!(doc.parameters.names(), vec!["a"]);
        assert!(parser.warnings().is_empty());
    }

    #[test]
    fn test_section_text_that_is_not_an_entry_warns() {
        let mut parser = DocParser::new("Summary.\n\nArgs:\n  Nothing to see here.\n");
        let doc = parser.parse();
        assert!(doc.parameters.is_empty());
        assert_eq!(parser.warnings().len(), 1);
    }

    #[test]
    fn test_repeated_header_is_skipped() {
        let doc = parse(
            "Summary.

            Args:
              a: first
            Args:
              b: second
            ",
        );
        assert_eq!(doc.parameters.names(), vec!["a", "b"]);
    }

    #[test]
    fn test_other_section_before_args() {
        let doc = parse(
            "Summary.

            Returns:
              nothing: really
            Args:
              x (int): some text
            ",
        );
        assert_eq!(doc.description, "");
        assert_eq!(doc.parameters.names(), vec!["x"]);
        assert_eq!(doc.parameters.get("x").unwrap().type_hint.as_deref(), Some("int"));
    }

    #[test]
    fn test_parse_is_repeatable() {
        let mut parser = DocParser::new("Summary.\n\nArgs:\n  a: one\n  junk\n");
        let first = parser.parse();
        let first_warnings = parser.warnings().to_vec();
        let second = parser.parse();
        assert_eq!(first, second);
        assert_eq!(first_warnings, parser.warnings());
    }
}
