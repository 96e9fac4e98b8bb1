use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use docargs::config::CommandConfig;
use docargs::{Arguments, CommandOptions, Error, Function, Program, merge_target};
use docargs_core::parse_signature;
use docargs_docstring::output::{OutputFormat, format_doc, format_merged};
use docargs_docstring::parser::DocParser;
use tracing_subscriber::EnvFilter;

const DEFAULT_COMMAND_NAME: &str = "command";

#[derive(Debug, Parser)]
#[command(name = "docargs")]
#[command(about = "Inspect command-line arguments derived from documentation strings")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a documentation string and print the structured record.
    Parse(ParseArgs),
    /// Merge documentation with a signature and overrides and print the result.
    Merge(MergeArgs),
    /// Register the merged command with clap, parse ARGV and print the values.
    Preview(PreviewArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// File containing the documentation string (default: stdin).
    #[arg(long)]
    input: Option<PathBuf>,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct TargetArgs {
    /// File containing the documentation string.
    #[arg(long)]
    input: PathBuf,
    /// Command name (default: config name, else "command").
    #[arg(long)]
    name: Option<String>,
    /// Parameter list, e.g. "title, name, count=1".
    #[arg(long)]
    signature: Option<String>,
    /// YAML file with command settings and argument overrides.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct MergeArgs {
    #[command(flatten)]
    target: TargetArgs,
    /// Output format.
    #[arg(long, default_value = "json")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct PreviewArgs {
    #[command(flatten)]
    target: TargetArgs,
    /// Arguments for the previewed command, after `--`.
    #[arg(last = true, allow_hyphen_values = true)]
    argv: Vec<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Merge(args) => run_merge(args),
        Command::Preview(args) => run_preview(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let text = match &args.input {
        Some(path) => read_file(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|err| format!("Failed to read stdin: {err}"))?;
            text
        }
    };

    let mut parser = DocParser::new(&text);
    let doc = parser.parse();
    for warning in parser.warnings() {
        tracing::warn!("{warning}");
    }

    println!("{}", format_doc(&doc, args.format)?);
    Ok(())
}

fn run_merge(args: MergeArgs) -> Result<(), String> {
    let (function, options) = load_target(&args.target, |_| ())?;
    let merged = merge_target(&function, &options).map_err(|err| err.to_string())?;
    println!("{}", format_merged(&merged, args.format)?);
    Ok(())
}

fn run_preview(args: PreviewArgs) -> Result<(), String> {
    let (function, options) = load_target(&args.target, |values: &Arguments| {
        serde_json::to_string_pretty(values)
    })?;

    let name = options.name.clone().unwrap_or_default();
    let mut program = Program::new("docargs");
    program
        .add_command(function, options)
        .map_err(|err| err.to_string())?;

    let argv = ["docargs".to_string(), name]
        .into_iter()
        .chain(args.argv);
    match program.parse_and_run(argv) {
        Ok(json) => {
            let json = json.map_err(|err| format!("JSON serialization failed: {err}"))?;
            println!("{json}");
            Ok(())
        }
        Err(Error::Parse(err)) if !err.use_stderr() => {
            print!("{err}");
            Ok(())
        }
        Err(Error::Parse(err)) => Err(format!(
            "invalid arguments: {}",
            err.to_string().trim_start_matches("error: ").trim_end()
        )),
        Err(err) => Err(err.to_string()),
    }
}

/// Builds the target function and options from the input file, the
/// signature flag and the optional config file.
fn load_target<R>(
    args: &TargetArgs,
    target: impl Fn(&Arguments) -> R + 'static,
) -> Result<(Function<R>, CommandOptions), String> {
    let doc = read_file(&args.input)?;
    let config = match &args.config {
        Some(path) => CommandConfig::load(path).map_err(|err| err.to_string())?,
        None => CommandConfig::default(),
    };

    let name = args
        .name
        .clone()
        .or_else(|| config.name.clone())
        .unwrap_or_else(|| DEFAULT_COMMAND_NAME.to_string());
    let signature = match &args.signature {
        Some(text) => Some(parse_signature(text)),
        None => config.signature(),
    };

    let mut function = Function::new(&name, target).with_doc(&doc);
    if let Some(signature) = signature {
        function = function.with_signature(signature);
    }

    let mut options = config.into_options();
    options.name = Some(name);
    Ok((function, options))
}

fn read_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| {
        Error::Io {
            path: path.to_path_buf(),
            source: err,
        }
        .to_string()
    })
}
