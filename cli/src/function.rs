//! Dispatch targets and their registration options.

use std::fmt;

use docargs_core::{ArgumentSpec, HelpFormatter, KindPolicy, MergeOptions, Signature, Value};

use crate::Arguments;

/// Metadata a callable exposes for argument inference.
pub trait Introspect {
    /// Name used for the command when none is given explicitly.
    fn name(&self) -> &str;

    /// Raw documentation text, if any.
    fn doc(&self) -> Option<&str>;

    /// Declared parameters; `None` when the callable declares nothing.
    fn signature(&self) -> Option<&Signature>;
}

/// A named target closure with its documentation and parameter list.
///
/// A function starts without a signature. Declaring parameters with
/// [`param`](Self::param) (or an empty [`Signature`] via
/// [`with_signature`](Self::with_signature) for zero-argument commands)
/// makes it registrable.
///
/// # Examples
///
/// ```
/// use docargs::{Function, Introspect};
///
/// let greeting = Function::new("greeting", |args| {
///     format!("{} {}", args.str("title").unwrap_or(""), args.str("name").unwrap_or(""))
/// })
/// .with_doc("Print a greeting message.\n\nArgs:\n  title: title\n  name: name\n")
/// .param("title")
/// .param("name");
///
/// assert_eq!(greeting.name(), "greeting");
/// assert_eq!(greeting.signature().map(|s| s.len()), Some(2));
/// ```
pub struct Function<R> {
    name: String,
    doc: Option<String>,
    signature: Option<Signature>,
    target: Box<dyn Fn(&Arguments) -> R>,
}

impl<R> Function<R> {
    pub fn new(name: &str, target: impl Fn(&Arguments) -> R + 'static) -> Self {
        Self {
            name: name.to_string(),
            doc: None,
            signature: None,
            target: Box::new(target),
        }
    }

    pub fn with_doc(mut self, doc: &str) -> Self {
        self.doc = Some(doc.to_string());
        self
    }

    /// Declares a parameter without a default.
    pub fn param(mut self, name: &str) -> Self {
        let signature = self.signature.take().unwrap_or_default();
        self.signature = Some(signature.param(name));
        self
    }

    /// Declares a parameter with a default value.
    pub fn param_with_default(mut self, name: &str, default: impl Into<Value>) -> Self {
        let signature = self.signature.take().unwrap_or_default();
        self.signature = Some(signature.param_with_default(name, default));
        self
    }

    /// Replaces the whole parameter list.
    pub fn with_signature(mut self, signature: Signature) -> Self {
        self.signature = Some(signature);
        self
    }

    /// Invokes the target with bound values.
    pub fn call(&self, arguments: &Arguments) -> R {
        (self.target)(arguments)
    }
}

impl<R> Introspect for Function<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }
}

impl<R> fmt::Debug for Function<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("doc", &self.doc)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Explicit settings for a subcommand. Anything set here beats inference.
///
/// # Examples
///
/// ```
/// use docargs::CommandOptions;
/// use docargs_core::{ArgumentSpec, KindPolicy};
///
/// let options = CommandOptions::new()
///     .named("hello")
///     .argument(ArgumentSpec::new("--title").with_help("custom"))
///     .exclude("verbose")
///     .kind(KindPolicy::AllOptional);
///
/// assert_eq!(options.name.as_deref(), Some("hello"));
/// assert_eq!(options.arguments[0].name, "title");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandOptions {
    pub name: Option<String>,
    pub help: Option<String>,
    pub description: Option<String>,
    pub formatter: Option<HelpFormatter>,
    /// Partial argument definitions; the last one wins per name.
    pub arguments: Vec<ArgumentSpec>,
    pub excludes: Vec<String>,
    pub kind: KindPolicy,
}

impl CommandOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_formatter(mut self, formatter: HelpFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    pub fn argument(mut self, spec: ArgumentSpec) -> Self {
        self.arguments.push(spec);
        self
    }

    pub fn exclude(mut self, name: &str) -> Self {
        self.excludes.push(name.to_string());
        self
    }

    pub fn kind(mut self, kind: KindPolicy) -> Self {
        self.kind = kind;
        self
    }

    pub(crate) fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            kind: self.kind,
            excludes: self.excludes.clone(),
        }
    }
}
