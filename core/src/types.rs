//! Data model for docstring-derived command-line arguments.
//!
//! The types here sit between the documentation parser, which produces
//! [`DocRecord`]s, and the argument parser, which consumes
//! [`ArgumentSpec`]s and [`CommandSpec`]s. Everything is serializable with
//! [`serde`] so merged results can be dumped as JSON or YAML for inspection.
//!
//! Every mergeable field of [`ArgumentSpec`] is an [`Option`]: `None` means
//! "not set by anyone yet" and is the only state inference is allowed to
//! fill. `Some(String::new())` is an explicit empty value and is kept.

use std::fmt;
use std::path::PathBuf;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Documentation for a single parameter.
///
/// # Examples
///
/// ```
/// use docargs_core::ParamDoc;
///
/// let doc = ParamDoc::new("number of retries").with_type_hint("int");
/// assert_eq!(doc.help, "number of retries");
/// assert_eq!(doc.type_hint.as_deref(), Some("int"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamDoc {
    /// Help text, continuation lines joined with single spaces.
    pub help: String,
    /// Raw type token from a `name (TYPE): ...` entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_hint: Option<String>,
}

impl ParamDoc {
    /// Creates an entry with help text and no type token.
    pub fn new(help: &str) -> Self {
        Self {
            help: help.to_string(),
            type_hint: None,
        }
    }

    /// Attaches a raw type token.
    pub fn with_type_hint(mut self, hint: &str) -> Self {
        self.type_hint = Some(hint.to_string());
        self
    }
}

/// Parameter documentation keyed by name, in documentation order.
///
/// Re-inserting an existing name replaces its entry in place, so the last
/// occurrence wins while the first occurrence keeps its position.
///
/// # Examples
///
/// ```
/// use docargs_core::{ParamDoc, ParamDocs};
///
/// let mut params = ParamDocs::new();
/// params.insert("name", ParamDoc::new("first"));
/// params.insert("title", ParamDoc::new("a title"));
/// params.insert("name", ParamDoc::new("second"));
///
/// assert_eq!(params.names(), vec!["name", "title"]);
/// assert_eq!(params.get("name").unwrap().help, "second");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamDocs {
    entries: Vec<(String, ParamDoc)>,
}

impl ParamDocs {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an entry, returning the replaced value.
    pub fn insert(&mut self, name: impl Into<String>, doc: ParamDoc) -> Option<ParamDoc> {
        let name = name.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, doc)),
            None => {
                self.entries.push((name, doc));
                None
            }
        }
    }

    /// Looks up an entry by exact (case-sensitive) name.
    pub fn get(&self, name: &str) -> Option<&ParamDoc> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, doc)| doc)
    }

    /// Mutable lookup by exact name.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut ParamDoc> {
        self.entries
            .iter_mut()
            .find(|(existing, _)| existing == name)
            .map(|(_, doc)| doc)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in documentation order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamDoc)> {
        self.entries.iter().map(|(name, doc)| (name.as_str(), doc))
    }

    /// Documented names in documentation order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }
}

impl FromIterator<(String, ParamDoc)> for ParamDocs {
    fn from_iter<I: IntoIterator<Item = (String, ParamDoc)>>(iter: I) -> Self {
        let mut params = ParamDocs::new();
        for (name, doc) in iter {
            params.insert(name, doc);
        }
        params
    }
}

impl Serialize for ParamDocs {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, doc) in &self.entries {
            map.serialize_entry(name, doc)?;
        }
        map.end()
    }
}

/// Structured form of a documentation string.
///
/// # Examples
///
/// ```
/// use docargs_core::{DocRecord, ParamDoc};
///
/// let mut doc = DocRecord::new("Print a greeting message.");
/// doc.description = "The greeting is \"{title} {name}\".".into();
/// doc.parameters.insert("name", ParamDoc::new("a name"));
///
/// assert_eq!(
///     doc.full_description(),
///     "Print a greeting message.\n\nThe greeting is \"{title} {name}\"."
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DocRecord {
    /// First non-blank line; never multi-line.
    pub summary: String,
    /// Free text between the summary and the first section header.
    pub description: String,
    /// Documented parameters in documentation order.
    pub parameters: ParamDocs,
}

impl DocRecord {
    /// Creates a record holding only a summary line.
    pub fn new(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            ..Default::default()
        }
    }

    /// True when nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.description.is_empty() && self.parameters.is_empty()
    }

    /// Summary and description separated by a blank line.
    ///
    /// Returns just the summary when there is no description, and an empty
    /// string for an empty record.
    pub fn full_description(&self) -> String {
        match (self.summary.is_empty(), self.description.is_empty()) {
            (_, true) => self.summary.clone(),
            (true, false) => self.description.clone(),
            (false, false) => format!("{}\n\n{}", self.summary, self.description),
        }
    }
}

/// Converter attached to an argument.
///
/// # Examples
///
/// ```
/// use docargs_core::{Value, ValueType};
///
/// assert_eq!(ValueType::Int.convert("42"), Ok(Value::Int(42)));
/// assert!(ValueType::Int.convert("forty-two").is_err());
/// assert_eq!(ValueType::Bool.convert("yes"), Ok(Value::Bool(true)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[serde(alias = "boolean")]
    Bool,
    #[serde(alias = "integer")]
    Int,
    #[serde(alias = "double")]
    Float,
    #[serde(alias = "string")]
    Str,
    Path,
}

impl ValueType {
    /// Short lowercase name used in help output and serialized specs.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Str => "str",
            ValueType::Path => "path",
        }
    }

    /// Converts one raw command-line token.
    pub fn convert(self, raw: &str) -> Result<Value, String> {
        match self {
            ValueType::Bool => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "on" | "1" => Ok(Value::Bool(true)),
                "false" | "no" | "n" | "off" | "0" => Ok(Value::Bool(false)),
                _ => Err(format!("invalid boolean value: {raw:?}")),
            },
            ValueType::Int => raw
                .trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|err| format!("invalid integer value {raw:?}: {err}")),
            ValueType::Float => raw
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|err| format!("invalid float value {raw:?}: {err}")),
            ValueType::Str => Ok(Value::Str(raw.to_string())),
            ValueType::Path => Ok(Value::Path(PathBuf::from(raw))),
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A literal argument value: a signature default or a parsed argv token.
///
/// Serialized values carry no type tag. A path is written as a plain string
/// and always reads back as [`Value::Str`]; the argument's `type` restores
/// it when the value is converted again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    #[serde(skip_deserializing)]
    Path(PathBuf),
}

impl Value {
    /// Scalar type of this value; lists report their first element's type.
    pub fn value_type(&self) -> Option<ValueType> {
        match self {
            Value::Bool(_) => Some(ValueType::Bool),
            Value::Int(_) => Some(ValueType::Int),
            Value::Float(_) => Some(ValueType::Float),
            Value::Str(_) => Some(ValueType::Str),
            Value::Path(_) => Some(ValueType::Path),
            Value::List(items) => items.first().and_then(Value::value_type),
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Float view; integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            Value::Path(p) => p.to_str(),
            _ => None,
        }
    }

    pub fn as_path(&self) -> Option<PathBuf> {
        match self {
            Value::Path(p) => Some(p.clone()),
            Value::Str(s) => Some(PathBuf::from(s)),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::Path(p) => write!(f, "{}", p.display()),
            Value::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<PathBuf> for Value {
    fn from(p: PathBuf) -> Self {
        Value::Path(p)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

/// Whether an argument is positional or a `--long` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArgKind {
    Positional,
    Optional,
}

/// One command-line argument as handed to the argument parser.
///
/// The same type describes both a caller's partial override and the final
/// merged result. Builder methods only ever set fields; inference only ever
/// fills fields that are still `None`.
///
/// # Examples
///
/// ```
/// use docargs_core::{ArgKind, ArgumentSpec, ValueType};
///
/// let spec = ArgumentSpec::from_flags(&["-c", "--count"])
///     .with_type(ValueType::Int)
///     .with_help("How many times");
///
/// assert_eq!(spec.name, "count");
/// assert_eq!(spec.short, Some('c'));
/// assert_eq!(spec.long.as_deref(), Some("count"));
/// assert_eq!(spec.kind, Some(ArgKind::Optional));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArgumentSpec {
    /// Parameter name; matched against signature and documentation.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Accepts one or more values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<ArgKind>,
    /// Long flag without leading dashes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short: Option<char>,
    /// Placeholder shown in usage (metavar).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

impl ArgumentSpec {
    /// Creates an empty spec for `name`. Leading dashes are stripped.
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_name(name).to_string(),
            ..Default::default()
        }
    }

    /// Creates a spec from parser-style flag strings (`-t`, `--title`, `title`).
    ///
    /// The name comes from the first long flag, else the first short flag,
    /// else the first bare word. Any dashed flag makes the argument optional.
    pub fn from_flags(flags: &[&str]) -> Self {
        let mut spec = ArgumentSpec::default();
        let mut bare: Option<&str> = None;

        for flag in flags {
            if let Some(long) = flag.strip_prefix("--") {
                if spec.long.is_none() && !long.is_empty() {
                    spec.long = Some(long.to_string());
                }
            } else if let Some(short) = flag.strip_prefix('-') {
                let mut chars = short.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    spec.short.get_or_insert(ch);
                } else if spec.long.is_none() && !short.is_empty() {
                    spec.long = Some(short.to_string());
                }
            } else if bare.is_none() && !flag.is_empty() {
                bare = Some(flag);
            }
        }

        spec.name = match (&spec.long, spec.short, bare) {
            (Some(long), _, _) => long.clone(),
            (None, Some(short), _) => short.to_string(),
            (None, None, Some(word)) => word.to_string(),
            (None, None, None) => String::new(),
        };
        if spec.long.is_some() || spec.short.is_some() {
            spec.kind = Some(ArgKind::Optional);
        }
        spec
    }

    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    pub fn with_type(mut self, value_type: ValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Marks as accepting one or more values.
    pub fn allow_multiple(mut self) -> Self {
        self.multiple = Some(true);
        self
    }

    pub fn positional(mut self) -> Self {
        self.kind = Some(ArgKind::Positional);
        self
    }

    pub fn optional(mut self) -> Self {
        self.kind = Some(ArgKind::Optional);
        self
    }

    pub fn with_long(mut self, long: &str) -> Self {
        self.long = Some(normalize_name(long).to_string());
        self.kind.get_or_insert(ArgKind::Optional);
        self
    }

    pub fn with_short(mut self, short: char) -> Self {
        self.short = Some(short);
        self.kind.get_or_insert(ArgKind::Optional);
        self
    }

    pub fn with_value_name(mut self, value_name: &str) -> Self {
        self.value_name = Some(value_name.to_string());
        self
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Positional unless explicitly optional or given a flag.
    pub fn is_positional(&self) -> bool {
        match self.kind {
            Some(kind) => kind == ArgKind::Positional,
            None => self.long.is_none() && self.short.is_none(),
        }
    }

    pub fn is_multiple(&self) -> bool {
        self.multiple.unwrap_or(false)
    }

    /// Usage-style label: `--long`, `-s`, or the bare name.
    pub fn display_name(&self) -> String {
        if self.is_positional() {
            return self.name.clone();
        }
        match (&self.long, self.short) {
            (Some(long), _) => format!("--{long}"),
            (None, Some(short)) => format!("-{short}"),
            (None, None) => format!("--{}", self.name),
        }
    }
}

/// Strips leading dashes from a flag-style name.
pub fn normalize_name(name: &str) -> &str {
    name.trim_start_matches('-')
}

/// One declared parameter of a target callable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParamInfo {
    /// A parameter without a default.
    pub fn required(name: &str) -> Self {
        Self {
            name: name.to_string(),
            default: None,
        }
    }

    pub fn with_default(name: &str, default: impl Into<Value>) -> Self {
        Self {
            name: name.to_string(),
            default: Some(default.into()),
        }
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// Ordered parameter list of a target callable.
///
/// Declared explicitly when a command is registered.
///
/// # Examples
///
/// ```
/// use docargs_core::{Signature, Value};
///
/// let sig = Signature::new()
///     .param("title")
///     .param("name")
///     .param_with_default("count", 1i64);
///
/// assert_eq!(sig.names(), vec!["title", "name", "count"]);
/// assert_eq!(sig.get("count").unwrap().default, Some(Value::Int(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signature {
    pub params: Vec<ParamInfo>,
}

impl Signature {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter without a default.
    pub fn param(mut self, name: &str) -> Self {
        self.params.push(ParamInfo::required(name));
        self
    }

    /// Appends a parameter with a default.
    pub fn param_with_default(mut self, name: &str, default: impl Into<Value>) -> Self {
        self.params.push(ParamInfo::with_default(name, default));
        self
    }

    pub fn with_param(mut self, param: ParamInfo) -> Self {
        self.params.push(param);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamInfo> {
        self.params.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamInfo> {
        self.params.iter()
    }
}

/// How long descriptions are rendered by the argument parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HelpFormatter {
    /// Paragraphs are re-flowed into single lines.
    #[default]
    Default,
    /// Literal line breaks are preserved.
    RawText,
}

/// Command-level metadata for a program or subcommand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub name: String,
    /// Short help shown in command listings.
    pub help: String,
    /// Long description shown by `--help`.
    pub description: String,
    pub formatter: HelpFormatter,
}

impl CommandSpec {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

/// A command together with its merged arguments.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergedCommand {
    pub command: CommandSpec,
    pub arguments: Vec<ArgumentSpec>,
}

impl MergedCommand {
    pub fn find_argument(&self, name: &str) -> Option<&ArgumentSpec> {
        self.arguments.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_docs_last_occurrence_wins_in_place() {
        let mut params = ParamDocs::new();
        params.insert("a", ParamDoc::new("one"));
        params.insert("b", ParamDoc::new("two"));
        let replaced = params.insert("a", ParamDoc::new("three"));

        assert_eq!(replaced, Some(ParamDoc::new("one")));
        assert_eq!(params.names(), vec!["a", "b"]);
        assert_eq!(params.get("a").map(|d| d.help.as_str()), Some("three"));
    }

    #[test]
    fn test_param_docs_serialize_in_documentation_order() {
        let params: ParamDocs = vec![
            ("zeta".to_string(), ParamDoc::new("last letter")),
            ("alpha".to_string(), ParamDoc::new("first letter").with_type_hint("str")),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(
            json,
            r#"{"zeta":{"help":"last letter"},"alpha":{"help":"first letter","type_hint":"str"}}"#
        );
    }

    #[test]
    fn test_full_description_variants() {
        assert_eq!(DocRecord::default().full_description(), "");
        assert_eq!(DocRecord::new("Only summary.").full_description(), "Only summary.");

        let mut doc = DocRecord::new("Summary.");
        doc.description = "More text.".to_string();
        assert_eq!(doc.full_description(), "Summary.\n\nMore text.");
    }

    #[test]
    fn test_from_flags_picks_long_name() {
        let spec = ArgumentSpec::from_flags(&["-t", "--title"]);
        assert_eq!(spec.name, "title");
        assert_eq!(spec.short, Some('t'));
        assert!(!spec.is_positional());

        let positional = ArgumentSpec::from_flags(&["path"]);
        assert_eq!(positional.name, "path");
        assert!(positional.is_positional());
        assert_eq!(positional.kind, None);
    }

    #[test]
    fn test_new_strips_leading_dashes() {
        assert_eq!(ArgumentSpec::new("--dry-run").name, "dry-run");
        assert_eq!(normalize_name("-v"), "v");
    }

    #[test]
    fn test_value_type_convert_errors_are_descriptive() {
        let err = ValueType::Float.convert("abc").unwrap_err();
        assert!(err.contains("invalid float value"));
        assert!(ValueType::Bool.convert("maybe").is_err());
        assert_eq!(
            ValueType::Path.convert("/tmp/x"),
            Ok(Value::Path(PathBuf::from("/tmp/x")))
        );
    }

    #[test]
    fn test_value_display_and_type() {
        let list = Value::from(vec![1i64, 2, 3]);
        assert_eq!(list.to_string(), "[1, 2, 3]");
        assert_eq!(list.value_type(), Some(ValueType::Int));
        assert_eq!(Value::List(Vec::new()).value_type(), None);
        assert_eq!(Value::from(2.5).to_string(), "2.5");
    }

    #[test]
    fn test_argument_spec_yaml_style_deserialize() {
        let spec: ArgumentSpec =
            serde_json::from_str(r#"{"help":"custom","type":"int","short":"n"}"#).unwrap();
        assert_eq!(spec.help.as_deref(), Some("custom"));
        assert_eq!(spec.value_type, Some(ValueType::Int));
        assert_eq!(spec.short, Some('n'));
        assert!(spec.name.is_empty());
    }

    #[test]
    fn test_path_value_reads_back_as_string() {
        let json = serde_json::to_string(&Value::Path(PathBuf::from("out/a.txt"))).unwrap();
        assert_eq!(json, r#""out/a.txt""#);

        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::Str("out/a.txt".to_string()));
        assert_eq!(
            ValueType::Path.convert(back.as_str().unwrap()),
            Ok(Value::Path(PathBuf::from("out/a.txt")))
        );
    }
}
