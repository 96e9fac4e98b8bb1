//! Structured documentation string parsing.
//!
//! This crate turns the documentation text of a function into a
//! [`DocRecord`]: a one-line summary, the free-text description that follows
//! it, and the help text and type token of each entry in the parameter
//! section (`Args:`, `Parameters:`, ...).
//!
//! # Main entry points
//!
//! - [`parse_docstring`] — parse documentation text.
//! - [`parse_optional`] — same, for callables that may have no documentation.
//! - [`parser::DocParser`] — the scanner itself, with access to warnings.
//! - [`output::format_doc`] / [`output::format_merged`] — render records
//!   and merged commands as JSON, YAML, Markdown or a plain table.
//!
//! Parsing never fails. Malformed documentation degrades to whatever could
//! be recognized, down to an empty record.
//!
//! # Example
//!
//! ```
//! use docargs_docstring::parse_docstring;
//!
//! let doc = parse_docstring(
//!     "Print a greeting message.
//!
//!     The message reads \"{title} {name}\".
//!
//!     Args:
//!       title: title of the person
//!       name (str): name of the person
//!
//!     Returns:
//!       nothing
//!     ",
//! );
//!
//! assert_eq!(doc.summary, "Print a greeting message.");
//! assert_eq!(doc.description, "The message reads \"{title} {name}\".");
//! assert_eq!(doc.parameters.names(), vec!["title", "name"]);
//! assert_eq!(doc.parameters.get("name").unwrap().type_hint.as_deref(), Some("str"));
//! ```
//!
//! [`DocRecord`]: docargs_core::DocRecord

pub mod output;
pub mod parser;

use docargs_core::DocRecord;
use parser::DocParser;

/// Parses documentation text into a [`DocRecord`].
///
/// Empty input yields an empty record.
///
/// # Examples
///
/// ```
/// use docargs_docstring::parse_docstring;
///
/// let doc = parse_docstring("Summary.\n\nArgs:\n  x (int): some text\n");
/// let x = doc.parameters.get("x").unwrap();
/// assert_eq!(x.type_hint.as_deref(), Some("int"));
/// assert_eq!(x.help, "some text");
///
/// assert!(parse_docstring("").is_empty());
/// ```
pub fn parse_docstring(raw: &str) -> DocRecord {
    DocParser::new(raw).parse()
}

/// Parses documentation that may be absent.
pub fn parse_optional(raw: Option<&str>) -> DocRecord {
    raw.map(parse_docstring).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional_none_is_empty() {
        assert_eq!(parse_optional(None), DocRecord::default());
        assert_eq!(parse_optional(Some("Hi.")).summary, "Hi.");
    }
}
