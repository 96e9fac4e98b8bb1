//! Type-token resolution and literal parsing.
//!
//! Documentation carries types as free-form tokens (`int`, `list[str]`,
//! `PathBuf`, `str, optional`). [`resolve_type_token`] maps the tokens it
//! understands onto a [`ValueType`] plus a "one or more values" marker and
//! returns `None` for everything else, so the caller can leave the field
//! unset instead of failing.

use crate::{Signature, Value, ValueType};

/// Result of resolving a type token or guessing from a default value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedType {
    /// Scalar converter, if known.
    pub value_type: Option<ValueType>,
    /// Whether the argument takes one or more values.
    pub multiple: bool,
}

impl ResolvedType {
    fn single(value_type: ValueType) -> Self {
        Self {
            value_type: Some(value_type),
            multiple: false,
        }
    }

    fn many(value_type: Option<ValueType>) -> Self {
        Self {
            value_type,
            multiple: true,
        }
    }
}

/// Resolves a raw documentation type token.
///
/// # Examples
///
/// ```
/// use docargs_core::{ValueType, resolve_type_token};
///
/// let int = resolve_type_token("int").unwrap();
/// assert_eq!(int.value_type, Some(ValueType::Int));
/// assert!(!int.multiple);
///
/// let list = resolve_type_token("list[str], optional").unwrap();
/// assert_eq!(list.value_type, Some(ValueType::Str));
/// assert!(list.multiple);
///
/// assert!(resolve_type_token("MyCustomType").is_none());
/// assert!(resolve_type_token("list[list[int]]").is_none());
/// ```
pub fn resolve_type_token(token: &str) -> Option<ResolvedType> {
    let token = strip_optional_marker(token);
    if token.is_empty() {
        return None;
    }

    let (outer, inner) = split_container(token)?;
    match inner {
        Some(inner) => {
            if inner.contains(['[', '<']) {
                return None;
            }
            let outer = outer.to_ascii_lowercase();
            if is_container(&outer) {
                scalar_type(inner).map(|vt| ResolvedType::many(Some(vt)))
            } else if is_optional_wrapper(&outer) {
                scalar_type(inner).map(ResolvedType::single)
            } else {
                None
            }
        }
        None => {
            if is_container(&outer.to_ascii_lowercase()) {
                Some(ResolvedType::many(Some(ValueType::Str)))
            } else {
                scalar_type(outer).map(ResolvedType::single)
            }
        }
    }
}

/// Guesses a converter from a declared default value.
///
/// Lists take one or more values typed after their first element; an
/// empty list only contributes the multiplicity.
pub fn guess_from_default(default: &Value) -> ResolvedType {
    match default {
        Value::List(items) => ResolvedType::many(items.first().and_then(Value::value_type)),
        other => ResolvedType {
            value_type: other.value_type(),
            multiple: false,
        },
    }
}

fn strip_optional_marker(token: &str) -> &str {
    let token = token.trim();
    match token.rsplit_once(',') {
        Some((head, tail)) if tail.trim().eq_ignore_ascii_case("optional") => head.trim(),
        _ => token,
    }
}

/// Splits `outer[inner]` / `outer<inner>`; `None` on unbalanced brackets.
fn split_container(token: &str) -> Option<(&str, Option<&str>)> {
    let Some(open) = token.find(['[', '<']) else {
        return Some((token, None));
    };
    let close = match token.as_bytes()[open] {
        b'[' => ']',
        _ => '>',
    };
    if !token.ends_with(close) {
        return None;
    }
    let outer = token[..open].trim();
    let inner = token[open + 1..token.len() - 1].trim();
    if outer.is_empty() || inner.is_empty() {
        return None;
    }
    Some((outer, Some(inner)))
}

fn is_container(lowered: &str) -> bool {
    matches!(
        lowered,
        "list" | "tuple" | "set" | "vec" | "sequence" | "iterable"
    )
}

fn is_optional_wrapper(lowered: &str) -> bool {
    matches!(lowered, "optional" | "option")
}

fn scalar_type(name: &str) -> Option<ValueType> {
    let lowered = name.trim().to_ascii_lowercase();
    let value_type = match lowered.as_str() {
        "int" | "integer" | "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32"
        | "u64" | "usize" => ValueType::Int,
        "float" | "f32" | "f64" | "double" | "number" => ValueType::Float,
        "str" | "string" | "text" | "&str" => ValueType::Str,
        "bool" | "boolean" => ValueType::Bool,
        "path" | "pathbuf" | "&path" | "file" | "filename" | "dir" | "directory" => {
            ValueType::Path
        }
        _ => return None,
    };
    Some(value_type)
}

/// Parses literal text into a [`Value`].
///
/// Quoted text is a string, `true`/`false` are booleans, numbers become
/// integers or floats, and `[a, b]` is a flat list. Anything else is kept
/// as a bare string.
///
/// # Examples
///
/// ```
/// use docargs_core::{Value, parse_literal};
///
/// assert_eq!(parse_literal("3"), Value::Int(3));
/// assert_eq!(parse_literal("0.5"), Value::Float(0.5));
/// assert_eq!(parse_literal("'3'"), Value::Str("3".into()));
/// assert_eq!(parse_literal("False"), Value::Bool(false));
/// assert_eq!(
///     parse_literal("[1, 2]"),
///     Value::List(vec![Value::Int(1), Value::Int(2)])
/// );
/// ```
pub fn parse_literal(raw: &str) -> Value {
    let text = raw.trim();

    if let Some(inner) = strip_quotes(text) {
        return Value::Str(inner.to_string());
    }
    match text {
        "true" | "True" => return Value::Bool(true),
        "false" | "False" => return Value::Bool(false),
        _ => {}
    }
    if let Ok(int) = text.parse::<i64>() {
        return Value::Int(int);
    }
    if text.chars().any(|ch| ch.is_ascii_digit()) {
        if let Ok(float) = text.parse::<f64>() {
            return Value::Float(float);
        }
    }
    if let Some(inner) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
        let items = split_top_level(inner)
            .into_iter()
            .filter(|item| !item.trim().is_empty())
            .map(parse_literal)
            .collect();
        return Value::List(items);
    }
    Value::Str(text.to_string())
}

fn strip_quotes(text: &str) -> Option<&str> {
    ['"', '\''].into_iter().find_map(|quote| {
        text.strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
    })
}

/// Splits on commas that are not nested inside brackets or quotes.
fn split_top_level(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (idx, ch) in text.char_indices() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '[' | '(' | '<') => depth += 1,
            (None, ']' | ')' | '>') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(&text[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&text[start..]);
    parts
}

/// Parses a compact signature such as `title, name, count=3, tags=[a, b]`.
///
/// Empty segments are skipped; the result is not validated, see
/// [`validate_signature`](crate::validate_signature).
///
/// # Examples
///
/// ```
/// use docargs_core::{Value, parse_signature};
///
/// let sig = parse_signature("title, name, count=3");
/// assert_eq!(sig.names(), vec!["title", "name", "count"]);
/// assert_eq!(sig.get("count").unwrap().default, Some(Value::Int(3)));
/// assert!(sig.get("title").unwrap().default.is_none());
/// ```
pub fn parse_signature(text: &str) -> Signature {
    split_top_level(text)
        .into_iter()
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .fold(Signature::new(), |sig, segment| match segment.split_once('=') {
            Some((name, default)) => sig.param_with_default(name.trim(), parse_literal(default)),
            None => sig.param(segment),
        })
}
