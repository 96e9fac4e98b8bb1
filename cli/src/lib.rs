//! Command-line interfaces built from function documentation.
//!
//! `docargs` sits on top of [`clap`]. Each target is a [`Function`] with a
//! documentation string and a declared parameter list. On registration the
//! documentation is parsed once, merged with the signature and any explicit
//! [`CommandOptions`], and turned into clap arguments:
//!
//! - the summary line becomes the subcommand's short help,
//! - summary plus description become the long `--help` text (line breaks
//!   kept verbatim by default),
//! - each documented parameter supplies help text and, when annotated as
//!   `name (type): ...`, a value converter.
//!
//! Explicit settings always win; documentation only fills gaps. Parsing
//! argv dispatches to the selected target with an [`Arguments`] map.
//!
//! # Example
//!
//! ```
//! use docargs::{CommandOptions, Function, Program};
//! use docargs_core::ArgumentSpec;
//!
//! let greeting = Function::new("greeting", |args| {
//!     let count = args.int("count").unwrap_or(1) as usize;
//!     format!("{} {}", args.str("title").unwrap_or(""), args.str("name").unwrap_or("")).repeat(count)
//! })
//! .with_doc(
//!     "Print a greeting message.
//!
//!     Args:
//!       title: title of the person
//!       name: name of the person
//!       count (int): how many times to greet
//!     ",
//! )
//! .param("title")
//! .param("name")
//! .param_with_default("count", 1i64);
//!
//! let mut program = Program::new("hello");
//! program.add_command(
//!     greeting,
//!     CommandOptions::new().argument(ArgumentSpec::new("title").with_help("how to address them")),
//! )?;
//!
//! let merged = program.merged("greeting").unwrap();
//! assert_eq!(merged.command.help, "Print a greeting message.");
//! assert_eq!(merged.arguments[0].help.as_deref(), Some("how to address them"));
//! assert_eq!(merged.arguments[1].help.as_deref(), Some("name of the person"));
//!
//! let out = program.parse_and_run(["hello", "greeting", "Ms.", "Smith", "--count", "2"])?;
//! assert_eq!(out, "Ms. SmithMs. Smith");
//! # Ok::<(), docargs::Error>(())
//! ```

pub mod config;
mod dispatch;
mod error;
mod function;
mod program;

pub use dispatch::{Arguments, render_description};
pub use error::Error;
pub use function::{CommandOptions, Function, Introspect};
pub use program::{Program, merge_target};
