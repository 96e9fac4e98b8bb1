//! Mapping merged specs onto clap and parse results back onto targets.

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use docargs_core::{ArgumentSpec, CommandSpec, HelpFormatter, SignatureError, Value, ValueType};
use serde::Serialize;
use tracing::debug;

/// Parsed values handed to a target, keyed by argument name.
///
/// Values of the top-level program are visible to subcommand targets. When
/// a subcommand argument shares its name with a top-level one, the
/// subcommand's value (or default) replaces the top-level value.
/// Arguments the user did not pass carry their declared default, or are
/// absent when there is none.
///
/// # Examples
///
/// ```
/// use docargs::Arguments;
/// use docargs_core::Value;
///
/// let mut args = Arguments::new();
/// args.insert("count", 3i64);
/// args.insert("verbose", true);
///
/// assert_eq!(args.int("count"), Some(3));
/// assert!(args.flag("verbose"));
/// assert!(!args.flag("quiet"));
/// assert_eq!(args.get("missing"), None::<&Value>);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Arguments {
    values: BTreeMap<String, Value>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_int)
    }

    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_float)
    }

    /// True only for a present `true` value.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(Value::as_bool).unwrap_or(false)
    }

    pub fn path(&self, name: &str) -> Option<PathBuf> {
        self.get(name).and_then(Value::as_path)
    }

    pub fn list(&self, name: &str) -> Option<&[Value]> {
        self.get(name).and_then(Value::as_list)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Optional booleans that are not on by default become plain switches.
fn is_switch(spec: &ArgumentSpec) -> bool {
    !spec.is_positional()
        && !spec.is_multiple()
        && spec.value_type == Some(ValueType::Bool)
        && spec.choices.is_none()
        && spec.default != Some(Value::Bool(true))
}

/// Converter closure for one argument: choices check, then typed conversion.
fn value_parser_for(
    spec: &ArgumentSpec,
) -> impl Fn(&str) -> Result<Value, String> + Clone + Send + Sync + 'static {
    let value_type = spec.value_type.unwrap_or(ValueType::Str);
    let choices = spec.choices.clone();
    move |raw: &str| {
        if let Some(choices) = &choices {
            if !choices.iter().any(|choice| choice == raw) {
                return Err(format!(
                    "invalid choice {raw:?} (choose from {})",
                    choices.join(", ")
                ));
            }
        }
        value_type.convert(raw)
    }
}

/// Rejects arguments that would collide with clap's generated `-h/--help`.
///
/// `build_arg` uses the name as the argument id and, for options without
/// explicit flags, as the long flag, so the name alone is enough to clash.
pub(crate) fn check_reserved(specs: &[ArgumentSpec]) -> Result<(), SignatureError> {
    let clashes = |spec: &ArgumentSpec| {
        spec.name == "help"
            || (!spec.is_positional()
                && (spec.long.as_deref() == Some("help") || spec.short == Some('h')))
    };
    match specs.iter().find(|spec| clashes(spec)) {
        Some(spec) => Err(SignatureError::ReservedName(spec.name.clone())),
        None => Ok(()),
    }
}

/// Builds the clap argument for a merged spec.
///
/// `required` is decided by the caller so positional ordering rules can be
/// applied across the whole command.
pub(crate) fn build_arg(spec: &ArgumentSpec, required: bool) -> Arg {
    let optional = !spec.is_positional();
    let mut arg = Arg::new(spec.name.clone());

    if optional {
        match (&spec.long, spec.short) {
            (None, None) => arg = arg.long(spec.name.clone()),
            (long, short) => {
                if let Some(long) = long {
                    arg = arg.long(long.clone());
                }
                if let Some(short) = short {
                    arg = arg.short(short);
                }
            }
        }
    }
    if let Some(help) = &spec.help {
        arg = arg.help(help.clone());
    }
    if let Some(value_name) = &spec.value_name {
        arg = arg.value_name(value_name.clone());
    }

    if is_switch(spec) {
        return arg.action(ArgAction::SetTrue);
    }

    arg = arg.value_parser(value_parser_for(spec)).required(required);
    if spec.is_multiple() {
        arg = arg.num_args(1..);
        if optional {
            arg = arg.action(ArgAction::Append);
        }
    } else {
        arg = arg.action(ArgAction::Set);
    }
    arg
}

/// Adds all merged arguments to `command`.
///
/// A positional is only left optional when every later positional is
/// optional too; clap rejects an optional positional before a required one.
pub(crate) fn add_arguments(mut command: Command, specs: &[ArgumentSpec]) -> Command {
    let mut required = vec![false; specs.len()];
    let mut later_positional_required = false;
    for (idx, spec) in specs.iter().enumerate().rev() {
        let wants = spec.required == Some(true) && spec.default.is_none();
        if spec.is_positional() {
            later_positional_required |= wants;
            required[idx] = wants || later_positional_required;
        } else {
            required[idx] = wants;
        }
    }

    for (spec, required) in specs.iter().zip(required) {
        command = command.arg(build_arg(spec, required));
    }
    command
}

/// Applies short help and long description to `command`.
pub(crate) fn apply_command_spec(mut command: Command, spec: &CommandSpec) -> Command {
    if !spec.help.is_empty() {
        command = command.about(spec.help.clone());
    }
    if !spec.description.is_empty() {
        command = command.long_about(render_description(&spec.description, spec.formatter));
    }
    command
}

/// Renders a long description for the chosen formatter.
///
/// Raw text is kept verbatim. The default formatter joins the lines of each
/// paragraph into one line, leaving clap to wrap them.
pub fn render_description(description: &str, formatter: HelpFormatter) -> String {
    match formatter {
        HelpFormatter::RawText => description.to_string(),
        HelpFormatter::Default => description
            .split("\n\n")
            .map(|paragraph| paragraph.split_whitespace().collect::<Vec<_>>().join(" "))
            .filter(|paragraph| !paragraph.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

/// Copies parsed values (or declared defaults) for `specs` into `into`.
///
/// Later calls overwrite values of the same name.
pub(crate) fn collect_values(specs: &[ArgumentSpec], matches: &ArgMatches, into: &mut Arguments) {
    for spec in specs {
        let name = spec.name.as_str();
        let parsed = if is_switch(spec) {
            Some(Value::Bool(matches.get_flag(name)))
        } else if spec.is_multiple() {
            matches
                .get_many::<Value>(name)
                .map(|values| Value::List(values.cloned().collect()))
        } else {
            matches.get_one::<Value>(name).cloned()
        };

        if let Some(value) = parsed.or_else(|| spec.default.clone()) {
            if let Some(previous) = into.get(name) {
                debug!(
                    argument = name,
                    ?previous,
                    current = ?value,
                    "value shadows an outer argument"
                );
            }
            into.insert(name, value);
        }
    }
}
