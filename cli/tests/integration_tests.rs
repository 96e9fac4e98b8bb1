use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const GREETING_DOC: &str = "Print a greeting message.

    The message reads \"{title} {name}\".

    Args:
      title: title of the person
      name: name of the person
      count (int): how many times to greet

    Returns:
      nothing
";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write test file");
    path
}

fn docargs(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docargs"))
        .args(args)
        .output()
        .expect("failed to run docargs")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("temp path must be valid UTF-8")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout must be JSON")
}

// ---------------------------------------------------------------------------
// parse
// ---------------------------------------------------------------------------

#[test]
fn parse_file_prints_doc_record_json() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "greeting.txt", GREETING_DOC);

    let out = docargs(&["parse", "--input", path_arg(&input)]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json = stdout_json(&out);
    assert_eq!(json["summary"], "Print a greeting message.");
    assert_eq!(json["description"], "The message reads \"{title} {name}\".");
    assert_eq!(json["parameters"]["title"]["help"], "title of the person");
    assert_eq!(json["parameters"]["count"]["type_hint"], "int");
    assert!(json["parameters"].get("nothing").is_none());
}

#[test]
fn parse_reads_stdin_and_renders_table() {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = Command::new(env!("CARGO_BIN_EXE_docargs"))
        .args(["parse", "--format", "table"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn docargs");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"Walk a tree.\n\nArgs:\n  depth (int): maximum depth\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Summary: Walk a tree."));
    assert!(stdout.contains("depth (int)  maximum depth"));
}

#[test]
fn parse_missing_file_fails() {
    let out = docargs(&["parse", "--input", "/nonexistent/doc.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("error: failed to read"));
}

// ---------------------------------------------------------------------------
// merge
// ---------------------------------------------------------------------------

#[test]
fn merge_with_signature_infers_arguments() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "greeting.txt", GREETING_DOC);

    let out = docargs(&[
        "merge",
        "--input",
        path_arg(&input),
        "--name",
        "greeting",
        "--signature",
        "title, name, count=1",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json = stdout_json(&out);
    assert_eq!(json["command"]["name"], "greeting");
    assert_eq!(json["command"]["help"], "Print a greeting message.");
    assert_eq!(json["command"]["formatter"], "raw-text");

    let args = json["arguments"].as_array().unwrap();
    assert_eq!(args.len(), 3);
    assert_eq!(args[0]["name"], "title");
    assert_eq!(args[0]["kind"], "positional");
    assert_eq!(args[0]["help"], "title of the person");
    assert_eq!(args[2]["name"], "count");
    assert_eq!(args[2]["kind"], "optional");
    assert_eq!(args[2]["type"], "int");
    assert_eq!(args[2]["default"], 1);
}

#[test]
fn merge_config_override_beats_documentation() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "greeting.txt", GREETING_DOC);
    let config = write_file(
        &dir,
        "greeting.yaml",
        r#"
name: greeting
help: Say hello
signature:
  - name: title
  - name: name
arguments:
  title:
    help: custom title help
"#,
    );

    let out = docargs(&[
        "merge",
        "--input",
        path_arg(&input),
        "--config",
        path_arg(&config),
        "--format",
        "yaml",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("help: Say hello"));
    assert!(stdout.contains("help: custom title help"));
    assert!(stdout.contains("help: name of the person"));
    assert!(!stdout.contains("title of the person"));
}

#[test]
fn merge_without_signature_fails_at_setup() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "greeting.txt", GREETING_DOC);

    let out = docargs(&["merge", "--input", path_arg(&input)]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("declares no signature"));
}

#[test]
fn merge_rejects_duplicate_parameters() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "greeting.txt", GREETING_DOC);

    let out = docargs(&[
        "merge",
        "--input",
        path_arg(&input),
        "--signature",
        "name, name",
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("invalid signature"));
}

// ---------------------------------------------------------------------------
// preview
// ---------------------------------------------------------------------------

#[test]
fn preview_binds_values_by_name() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "greeting.txt", GREETING_DOC);

    let out = docargs(&[
        "preview",
        "--input",
        path_arg(&input),
        "--name",
        "greeting",
        "--signature",
        "title, name, count=1",
        "--",
        "Dr.",
        "Who",
        "--count",
        "3",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let json = stdout_json(&out);
    assert_eq!(json["title"], "Dr.");
    assert_eq!(json["name"], "Who");
    assert_eq!(json["count"], 3);
}

#[test]
fn preview_help_shows_documentation() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "greeting.txt", GREETING_DOC);

    let out = docargs(&[
        "preview",
        "--input",
        path_arg(&input),
        "--name",
        "greeting",
        "--signature",
        "title, name",
        "--",
        "--help",
    ]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Print a greeting message.\n\nThe message reads"));
    assert!(stdout.contains("title of the person"));
    assert!(stdout.contains("name of the person"));
}

#[test]
fn preview_reports_invalid_values() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "greeting.txt", GREETING_DOC);

    let out = docargs(&[
        "preview",
        "--input",
        path_arg(&input),
        "--signature",
        "title, name, count=1",
        "--",
        "Dr.",
        "Who",
        "--count",
        "lots",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("invalid arguments"));
    assert!(stderr.contains("invalid integer value"));
}
