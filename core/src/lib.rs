//! Core types and merge rules for docstring-derived command-line arguments.
//!
//! This crate defines the data shared by the documentation parser and the
//! argument-parser glue:
//!
//! - [`DocRecord`] / [`ParamDoc`] — the structured form of a documentation
//!   string (summary, description, documented parameters).
//! - [`Signature`] / [`ParamInfo`] — the explicitly declared parameter list
//!   of a target callable.
//! - [`ArgumentSpec`] — one command-line argument, used both for partial
//!   user overrides and for merged results.
//! - [`CommandSpec`] — help and description of a program or subcommand.
//!
//! Merging ([`merge_arguments`], [`merge_command`]) combines a signature,
//! a parsed documentation record and user overrides. Explicit values always
//! win; documentation and defaults only fill gaps.
//!
//! # Example
//!
//! ```
//! use docargs_core::*;
//!
//! let signature = Signature::new().param("path").param_with_default("depth", 2i64);
//!
//! let mut doc = DocRecord::new("Walk a directory tree.");
//! doc.parameters.insert("path", ParamDoc::new("root directory").with_type_hint("path"));
//! doc.parameters.insert("depth", ParamDoc::new("maximum depth"));
//!
//! let args = merge_arguments(&signature, &doc, &[], &MergeOptions::default());
//! assert_eq!(args[0].value_type, Some(ValueType::Path));
//! assert_eq!(args[1].long.as_deref(), Some("depth"));
//! assert_eq!(args[1].value_type, Some(ValueType::Int));
//! assert!(validate_signature(&signature).is_empty());
//! ```

mod convert;
mod merge;
mod types;
mod validate;

pub use convert::{
    ResolvedType, guess_from_default, parse_literal, parse_signature, resolve_type_token,
};
pub use merge::{KindPolicy, MergeOptions, merge_arguments, merge_command, merge_program};
pub use types::*;
pub use validate::{SignatureError, validate_signature};
