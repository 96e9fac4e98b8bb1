//! Top-level program: registration, clap command assembly and dispatch.

use std::ffi::OsString;

use clap::Command;
use docargs_core::{
    ArgumentSpec, CommandSpec, DocRecord, HelpFormatter, MergeOptions, MergedCommand, Signature,
    merge_arguments, merge_command, merge_program, normalize_name, validate_signature,
};
use docargs_docstring::parse_optional;
use tracing::debug;

use crate::dispatch::{add_arguments, apply_command_spec, check_reserved, collect_values};
use crate::{Arguments, CommandOptions, Error, Function, Introspect};

struct Registered<R> {
    merged: MergedCommand,
    function: Function<R>,
}

/// A command-line program whose help and arguments come from documentation.
///
/// Registration parses each target's documentation once and merges it with
/// the declared signature and caller overrides. Parsing argv then invokes the
/// selected target with values bound by argument name.
///
/// # Examples
///
/// ```
/// use docargs::{CommandOptions, Function, Program};
///
/// let greeting = Function::new("greeting", |args| {
///     format!("{} {}", args.str("title").unwrap_or(""), args.str("name").unwrap_or(""))
/// })
/// .with_doc(
///     "Print a greeting message.
///
///     Args:
///       title: title of the person
///       name: name of the person
///     ",
/// )
/// .param("title")
/// .param("name");
///
/// let mut program = Program::new("hello");
/// program.add_command(greeting, CommandOptions::new())?;
///
/// let out = program.parse_and_run(["hello", "greeting", "Dr.", "Who"])?;
/// assert_eq!(out, "Dr. Who");
/// # Ok::<(), docargs::Error>(())
/// ```
pub struct Program<R> {
    spec: CommandSpec,
    doc: DocRecord,
    main: Option<Function<R>>,
    signature: Signature,
    overrides: Vec<ArgumentSpec>,
    arguments: Vec<ArgumentSpec>,
    commands: Vec<Registered<R>>,
}

impl<R> Program<R> {
    /// Creates a program without a main target.
    pub fn new(name: &str) -> Self {
        Self {
            spec: merge_program(name, &DocRecord::default(), None, None),
            doc: DocRecord::default(),
            main: None,
            signature: Signature::new(),
            overrides: Vec::new(),
            arguments: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Creates a program around its main callable.
    ///
    /// The description comes from the main callable's documentation, and
    /// its declared parameters become top-level arguments. When argv selects
    /// no subcommand, the main callable runs.
    pub fn from_main(main: Function<R>) -> Result<Self, Error> {
        let signature = checked_signature(&main)?.clone();
        let doc = parse_optional(main.doc());
        let spec = merge_program(main.name(), &doc, None, None);
        let arguments = merge_arguments(&signature, &doc, &[], &MergeOptions::default());
        checked_arguments(main.name(), &arguments)?;
        debug!(program = %spec.name, arguments = arguments.len(), "program created from main");

        Ok(Self {
            spec,
            doc,
            main: Some(main),
            signature,
            overrides: Vec::new(),
            arguments,
            commands: Vec::new(),
        })
    }

    /// Replaces the long description shown by `--help`.
    pub fn with_description(mut self, description: &str) -> Self {
        self.spec.description = description.to_string();
        self
    }

    pub fn with_formatter(mut self, formatter: HelpFormatter) -> Self {
        self.spec.formatter = formatter;
        self
    }

    /// Adds or overrides a top-level argument.
    ///
    /// Leading dashes are stripped from the name. Fields left unset are
    /// filled from the main callable's documentation and signature. An
    /// argument that takes over `-h` or `--help` is refused and leaves the
    /// program unchanged.
    pub fn add_argument(&mut self, mut spec: ArgumentSpec) -> Result<&mut Self, Error> {
        spec.name = normalize_name(&spec.name).to_string();
        let mut overrides = self.overrides.clone();
        overrides.push(spec);
        let arguments = merge_arguments(
            &self.signature,
            &self.doc,
            &overrides,
            &MergeOptions::default(),
        );
        checked_arguments(&self.spec.name, &arguments)?;

        if let Some(spec) = overrides.last() {
            debug!(argument = %spec.name, "top-level argument added");
        }
        self.overrides = overrides;
        self.arguments = arguments;
        Ok(self)
    }

    /// Registers a subcommand.
    ///
    /// Fails when the function declares no signature, when the signature is
    /// invalid, when an argument takes over `-h`/`--help`, or when the
    /// command name is taken. Documentation problems
    /// never fail; they only leave metadata empty.
    pub fn add_command(
        &mut self,
        function: Function<R>,
        options: CommandOptions,
    ) -> Result<&mut Self, Error> {
        let merged = merge_target(&function, &options)?;
        let name = merged.command.name.clone();
        if self.commands.iter().any(|c| c.merged.command.name == name) {
            return Err(Error::DuplicateCommand(name));
        }

        debug!(
            command = %name,
            arguments = merged.arguments.len(),
            "command registered"
        );
        self.commands.push(Registered { merged, function });
        Ok(self)
    }

    /// Program-level metadata.
    pub fn spec(&self) -> &CommandSpec {
        &self.spec
    }

    /// Merged top-level arguments.
    pub fn arguments(&self) -> &[ArgumentSpec] {
        &self.arguments
    }

    /// Merged metadata of a registered subcommand.
    pub fn merged(&self, name: &str) -> Option<&MergedCommand> {
        self.commands
            .iter()
            .map(|c| &c.merged)
            .find(|m| m.command.name == name)
    }

    /// Builds the clap command tree.
    pub fn command(&self) -> Command {
        let mut command = add_arguments(
            apply_command_spec(Command::new(self.spec.name.clone()), &self.spec),
            &self.arguments,
        );

        for registered in &self.commands {
            let merged = &registered.merged;
            let sub = apply_command_spec(Command::new(merged.command.name.clone()), &merged.command);
            command = command.subcommand(add_arguments(sub, &merged.arguments));
        }

        if self.main.is_none() && !self.commands.is_empty() {
            command = command.subcommand_required(true).arg_required_else_help(true);
        }
        command
    }

    /// Parses `argv` (program name first) and runs the selected target.
    ///
    /// Returns whatever the target returns. Invalid input, including
    /// `--help`, comes back as [`Error::Parse`] untouched.
    pub fn parse_and_run<I, T>(&self, argv: I) -> Result<R, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command().try_get_matches_from(argv)?;
        let mut arguments = Arguments::new();
        collect_values(&self.arguments, &matches, &mut arguments);

        match matches.subcommand() {
            Some((name, sub_matches)) => {
                let registered = self
                    .commands
                    .iter()
                    .find(|c| c.merged.command.name == name)
                    .ok_or(Error::NoTarget)?;
                collect_values(&registered.merged.arguments, sub_matches, &mut arguments);
                debug!(command = name, values = arguments.len(), "dispatching");
                Ok(registered.function.call(&arguments))
            }
            None => {
                let main = self.main.as_ref().ok_or(Error::NoTarget)?;
                debug!(values = arguments.len(), "dispatching to main");
                Ok(main.call(&arguments))
            }
        }
    }

    /// Parses the process arguments and runs the selected target.
    ///
    /// Invalid input prints clap's message and exits the process the way
    /// clap does.
    pub fn run(&self) -> R {
        match self.parse_and_run(std::env::args_os()) {
            Ok(value) => value,
            Err(Error::Parse(err)) => err.exit(),
            Err(err) => {
                eprintln!("error: {err}");
                std::process::exit(2);
            }
        }
    }
}

fn checked_signature(target: &impl Introspect) -> Result<&Signature, Error> {
    let signature = target
        .signature()
        .ok_or_else(|| Error::SignatureUnavailable(target.name().to_string()))?;
    match validate_signature(signature).into_iter().next() {
        Some(source) => Err(Error::Signature {
            command: target.name().to_string(),
            source,
        }),
        None => Ok(signature),
    }
}

fn checked_arguments(command: &str, arguments: &[ArgumentSpec]) -> Result<(), Error> {
    check_reserved(arguments).map_err(|source| Error::Signature {
        command: command.to_string(),
        source,
    })
}

/// Merges a target's documentation and signature with caller options.
pub fn merge_target(target: &impl Introspect, options: &CommandOptions) -> Result<MergedCommand, Error> {
    let signature = checked_signature(target)?;
    let doc = parse_optional(target.doc());
    let name = options.name.as_deref().unwrap_or(target.name());

    let arguments = merge_arguments(signature, &doc, &options.arguments, &options.merge_options());
    checked_arguments(name, &arguments)?;
    let command = merge_command(
        name,
        &doc,
        options.help.as_deref(),
        options.description.as_deref(),
        options.formatter,
    );
    Ok(MergedCommand { command, arguments })
}
