//! Output formatting for parsed documentation and merged commands.

use docargs_core::{ArgKind, ArgumentSpec, DocRecord, MergedCommand};

/// Supported output formats.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Yaml,
    Markdown,
    Table,
}

/// Formats a parsed documentation record in the requested output format.
pub fn format_doc(doc: &DocRecord, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(doc)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(doc).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markdown => Ok(doc_to_markdown(doc)),
        OutputFormat::Table => Ok(doc_to_table(doc)),
    }
}

/// Formats a merged command in the requested output format.
pub fn format_merged(merged: &MergedCommand, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(merged)
            .map_err(|e| format!("JSON serialization failed: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(merged).map_err(|e| format!("YAML serialization failed: {e}"))
        }
        OutputFormat::Markdown => Ok(merged_to_markdown(merged)),
        OutputFormat::Table => Ok(merged_to_table(merged)),
    }
}

fn doc_to_markdown(doc: &DocRecord) -> String {
    let mut out = String::new();

    if !doc.summary.is_empty() {
        out.push_str(&format!("# {}\n\n", doc.summary));
    }
    if !doc.description.is_empty() {
        out.push_str(&format!("{}\n\n", doc.description));
    }

    if !doc.parameters.is_empty() {
        out.push_str("## Parameters\n\n");
        out.push_str("| Name | Type | Help |\n");
        out.push_str("|------|------|------|\n");
        for (name, param) in doc.parameters.iter() {
            let hint = param.type_hint.as_deref().unwrap_or("");
            out.push_str(&format!("| `{name}` | {hint} | {} |\n", param.help));
        }
        out.push('\n');
    }

    out
}

fn doc_to_table(doc: &DocRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!("Summary: {}\n", doc.summary));
    for line in doc.description.lines() {
        out.push_str(&format!("  {line}\n"));
    }

    if !doc.parameters.is_empty() {
        out.push_str("\nParameters:\n");
        let labels: Vec<(String, &str)> = doc
            .parameters
            .iter()
            .map(|(name, param)| {
                let label = match &param.type_hint {
                    Some(hint) => format!("{name} ({hint})"),
                    None => name.to_string(),
                };
                (label, param.help.as_str())
            })
            .collect();
        let width = labels.iter().map(|(label, _)| label.len()).max().unwrap_or(4);
        for (label, help) in &labels {
            out.push_str(&format!("  {label:<width$}  {help}\n"));
        }
    }

    out
}

fn merged_to_markdown(merged: &MergedCommand) -> String {
    let mut out = String::new();
    let command = &merged.command;

    out.push_str(&format!("# {}\n\n", command.name));
    if !command.help.is_empty() {
        out.push_str(&format!("{}\n\n", command.help));
    }
    if !command.description.is_empty() && command.description != command.help {
        out.push_str("```text\n");
        out.push_str(&command.description);
        out.push_str("\n```\n\n");
    }

    if !merged.arguments.is_empty() {
        out.push_str("## Arguments\n\n");
        out.push_str("| Argument | Type | Required | Default | Help |\n");
        out.push_str("|----------|------|----------|---------|------|\n");
        for arg in &merged.arguments {
            let required = if arg.required == Some(true) { "yes" } else { "no" };
            let default = arg.default.as_ref().map(|d| d.to_string()).unwrap_or_default();
            let help = arg.help.as_deref().unwrap_or("");
            out.push_str(&format!(
                "| `{}` | {} | {required} | {default} | {help} |\n",
                usage_name(arg),
                type_label(arg),
            ));
        }
        out.push('\n');
    }

    out
}

fn merged_to_table(merged: &MergedCommand) -> String {
    let mut out = String::new();
    let command = &merged.command;

    out.push_str(&format!("Command: {}", command.name));
    if !command.help.is_empty() {
        out.push_str(&format!("  {}", command.help));
    }
    out.push('\n');

    if !merged.arguments.is_empty() {
        out.push_str("\nArguments:\n");
        let names: Vec<String> = merged.arguments.iter().map(usage_name).collect();
        let width = names.iter().map(String::len).max().unwrap_or(4);
        for (name, arg) in names.iter().zip(&merged.arguments) {
            let mut line = format!("  {name:<width$}  {:<6}", type_label(arg));
            if let Some(help) = &arg.help {
                line.push_str(&format!("  {help}"));
            }
            if let Some(default) = &arg.default {
                line.push_str(&format!(" [default: {default}]"));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }

    out
}

/// `--name`/`-n` for options, the bare name for positionals.
fn usage_name(arg: &ArgumentSpec) -> String {
    if arg.kind != Some(ArgKind::Optional) {
        return arg.name.clone();
    }
    match (arg.short, &arg.long) {
        (Some(short), Some(long)) => format!("-{short}, --{long}"),
        (Some(short), None) => format!("-{short}"),
        (None, Some(long)) => format!("--{long}"),
        (None, None) => format!("--{}", arg.name),
    }
}

fn type_label(arg: &ArgumentSpec) -> String {
    let base = arg.value_type.map_or("str", |t| t.name());
    if arg.is_multiple() {
        format!("{base}...")
    } else {
        base.to_string()
    }
}
