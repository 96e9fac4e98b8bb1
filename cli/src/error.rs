//! Errors raised while building or running a [`Program`](crate::Program).

use std::path::PathBuf;

use docargs_core::SignatureError;
use thiserror::Error;

/// Setup, parse and configuration failures.
///
/// Documentation problems never show up here; they degrade to missing
/// metadata instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The callable does not declare its parameters.
    #[error("`{0}` declares no signature; list its parameters explicitly")]
    SignatureUnavailable(String),

    /// The declared parameter list is unusable.
    #[error("invalid signature for `{command}`: {source}")]
    Signature {
        command: String,
        #[source]
        source: SignatureError,
    },

    #[error("command `{0}` is already registered")]
    DuplicateCommand(String),

    /// Nothing to dispatch to: no subcommand was selected and the program
    /// has no main target.
    #[error("no command to run")]
    NoTarget,

    /// Command-line input rejected by clap, including `--help` requests.
    #[error(transparent)]
    Parse(#[from] clap::Error),

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
