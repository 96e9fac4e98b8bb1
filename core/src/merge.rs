//! Merging inferred documentation with explicit argument definitions.
//!
//! The precedence rule is fixed: whatever the caller set explicitly is kept
//! as-is, documentation and signature defaults only fill fields that are
//! still unset.
//!
//! # Example
//!
//! ```
//! use docargs_core::*;
//!
//! let signature = Signature::new().param("title").param("name");
//! let mut doc = DocRecord::new("Print a greeting message.");
//! doc.parameters.insert("title", ParamDoc::new("title of the person"));
//! doc.parameters.insert("name", ParamDoc::new("name of the person"));
//!
//! let overrides = vec![ArgumentSpec::new("title").with_help("custom")];
//! let args = merge_arguments(&signature, &doc, &overrides, &MergeOptions::default());
//!
//! assert_eq!(args[0].help.as_deref(), Some("custom"));
//! assert_eq!(args[1].help.as_deref(), Some("name of the person"));
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convert::{ResolvedType, guess_from_default, resolve_type_token};
use crate::{ArgKind, ArgumentSpec, CommandSpec, DocRecord, HelpFormatter, ParamInfo, Signature};

/// How arguments without an explicit kind are registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KindPolicy {
    /// Parameters without a default are positional, the rest are `--options`.
    #[default]
    Auto,
    /// Every parameter becomes a `--option`.
    AllOptional,
    /// Every parameter becomes positional.
    AllPositional,
}

impl KindPolicy {
    fn kind_for(self, has_default: bool) -> ArgKind {
        match self {
            KindPolicy::Auto if has_default => ArgKind::Optional,
            KindPolicy::Auto => ArgKind::Positional,
            KindPolicy::AllOptional => ArgKind::Optional,
            KindPolicy::AllPositional => ArgKind::Positional,
        }
    }
}

/// Options for [`merge_arguments`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOptions {
    pub kind: KindPolicy,
    /// Signature parameters that are not registered automatically.
    pub excludes: Vec<String>,
}

/// Produces the final argument specs for a callable.
///
/// Output follows signature order. Overrides for names that are not in the
/// signature are appended afterwards in the order given. Documentation
/// entries that match neither are dropped.
pub fn merge_arguments(
    signature: &Signature,
    doc: &DocRecord,
    overrides: &[ArgumentSpec],
    options: &MergeOptions,
) -> Vec<ArgumentSpec> {
    let mut merged = Vec::with_capacity(signature.len());

    for param in signature.iter() {
        let user = find_override(overrides, &param.name);
        if user.is_none() && options.excludes.iter().any(|name| *name == param.name) {
            debug!(parameter = %param.name, "parameter excluded from registration");
            continue;
        }
        merged.push(merge_one(&param.name, Some(param), doc, user, options.kind));
    }

    let mut extra_names: Vec<&str> = Vec::new();
    for user in overrides {
        let name = user.name.as_str();
        if signature.get(name).is_some() || extra_names.contains(&name) {
            continue;
        }
        extra_names.push(name);
        let user = find_override(overrides, name);
        merged.push(merge_one(name, None, doc, user, options.kind));
    }

    for (name, _) in doc.parameters.iter() {
        if signature.get(name).is_none() && !extra_names.contains(&name) {
            debug!(parameter = name, "documented parameter has no matching argument");
        }
    }

    merged
}

/// Last override registered for `name`.
fn find_override<'a>(overrides: &'a [ArgumentSpec], name: &str) -> Option<&'a ArgumentSpec> {
    overrides.iter().rev().find(|spec| spec.name == name)
}

fn merge_one(
    name: &str,
    param: Option<&ParamInfo>,
    doc: &DocRecord,
    user: Option<&ArgumentSpec>,
    policy: KindPolicy,
) -> ArgumentSpec {
    let mut spec = user.cloned().unwrap_or_default();
    spec.name = name.to_string();

    if spec.default.is_none() {
        spec.default = param.and_then(|p| p.default.clone());
    }

    if let Some(param_doc) = doc.parameters.get(name) {
        if spec.help.is_none() {
            spec.help = Some(param_doc.help.clone());
        }
        if let Some(hint) = &param_doc.type_hint {
            match resolve_type_token(hint) {
                Some(resolved) => apply_resolved(&mut spec, resolved),
                None => debug!(parameter = name, token = %hint, "unresolvable type token ignored"),
            }
        }
    }

    if spec.value_type.is_none() {
        if let Some(default) = &spec.default {
            let guessed = guess_from_default(default);
            apply_resolved(&mut spec, guessed);
        }
    }

    let has_default = spec.default.is_some();
    if spec.kind.is_none() {
        spec.kind = Some(if param.is_some() {
            policy.kind_for(has_default)
        } else if spec.long.is_some() || spec.short.is_some() {
            ArgKind::Optional
        } else {
            ArgKind::Positional
        });
    }

    if param.is_some() && spec.required.is_none() {
        spec.required = Some(!has_default);
    }

    if spec.kind == Some(ArgKind::Optional) && spec.long.is_none() && spec.short.is_none() {
        spec.long = Some(name.to_string());
    }

    spec
}

fn apply_resolved(spec: &mut ArgumentSpec, resolved: ResolvedType) {
    if spec.value_type.is_none() {
        spec.value_type = resolved.value_type;
    }
    if spec.multiple.is_none() && resolved.multiple {
        spec.multiple = Some(true);
    }
}

/// Command metadata for a subcommand.
///
/// `help` is the caller's value, else the summary. `description` is the
/// caller's value, else summary and description joined by a blank line.
/// The formatter defaults to [`HelpFormatter::RawText`] so documentation
/// line breaks survive rendering.
///
/// # Examples
///
/// ```
/// use docargs_core::*;
///
/// let mut doc = DocRecord::new("Print a greeting message.");
/// doc.description = "Prints \"{title} {name}\".".into();
///
/// let spec = merge_command("greeting", &doc, None, None, None);
/// assert_eq!(spec.help, "Print a greeting message.");
/// assert_eq!(spec.description, "Print a greeting message.\n\nPrints \"{title} {name}\".");
/// assert_eq!(spec.formatter, HelpFormatter::RawText);
///
/// let custom = merge_command("greeting", &doc, Some("Say hi"), None, None);
/// assert_eq!(custom.help, "Say hi");
/// ```
pub fn merge_command(
    callable_name: &str,
    doc: &DocRecord,
    help: Option<&str>,
    description: Option<&str>,
    formatter: Option<HelpFormatter>,
) -> CommandSpec {
    CommandSpec {
        name: callable_name.to_string(),
        help: help
            .map(str::to_string)
            .unwrap_or_else(|| doc.summary.clone()),
        description: description
            .map(str::to_string)
            .unwrap_or_else(|| doc.full_description()),
        formatter: formatter.unwrap_or(HelpFormatter::RawText),
    }
}

/// Command metadata for the top-level program.
///
/// Follows the same rules as [`merge_command`]; the program's short help is
/// always the documentation summary.
pub fn merge_program(
    program_name: &str,
    doc: &DocRecord,
    description: Option<&str>,
    formatter: Option<HelpFormatter>,
) -> CommandSpec {
    merge_command(program_name, doc, None, description, formatter)
}
