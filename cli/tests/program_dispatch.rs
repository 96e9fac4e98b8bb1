use std::cell::RefCell;
use std::rc::Rc;

use docargs::{Arguments, CommandOptions, Error, Function, Program};
use docargs_core::{ArgKind, ArgumentSpec, HelpFormatter, KindPolicy, Value, ValueType};

const GREETING_DOC: &str = "Print a greeting message.

    The greeting reads \"{title} {name}\".

    Args:
      title: title of the person
      name: name of the person
    ";

fn greeting() -> Function<String> {
    Function::new("greeting", |args: &Arguments| {
        format!(
            "{} {}",
            args.str("title").unwrap_or_default(),
            args.str("name").unwrap_or_default()
        )
    })
    .with_doc(GREETING_DOC)
    .param("title")
    .param("name")
}

#[test]
fn greeting_end_to_end_without_override() {
    let mut program = Program::new("hello");
    program.add_command(greeting(), CommandOptions::new()).unwrap();

    let merged = program.merged("greeting").unwrap();
    assert_eq!(merged.command.help, "Print a greeting message.");
    assert_eq!(
        merged.command.description,
        "Print a greeting message.\n\nThe greeting reads \"{title} {name}\"."
    );
    assert_eq!(merged.command.formatter, HelpFormatter::RawText);
    assert_eq!(merged.arguments[0].help.as_deref(), Some("title of the person"));
    assert_eq!(merged.arguments[1].help.as_deref(), Some("name of the person"));

    let out = program
        .parse_and_run(["hello", "greeting", "Mr.", "Smith"])
        .unwrap();
    assert_eq!(out, "Mr. Smith");
}

#[test]
fn greeting_end_to_end_with_title_override() {
    let mut program = Program::new("hello");
    program
        .add_command(
            greeting(),
            CommandOptions::new().argument(
                ArgumentSpec::from_flags(&["-t", "--title"])
                    .with_help("custom")
                    .with_default("Dr."),
            ),
        )
        .unwrap();

    let merged = program.merged("greeting").unwrap();
    let title = merged.find_argument("title").unwrap();
    assert_eq!(title.help.as_deref(), Some("custom"));
    assert_eq!(title.kind, Some(ArgKind::Optional));
    assert_eq!(title.short, Some('t'));
    assert_eq!(
        merged.find_argument("name").unwrap().help.as_deref(),
        Some("name of the person")
    );

    assert_eq!(
        program.parse_and_run(["hello", "greeting", "Who"]).unwrap(),
        "Dr. Who"
    );
    assert_eq!(
        program
            .parse_and_run(["hello", "greeting", "-t", "Ms.", "Marple"])
            .unwrap(),
        "Ms. Marple"
    );
}

#[test]
fn help_text_comes_from_documentation() {
    let mut program = Program::new("hello");
    program.add_command(greeting(), CommandOptions::new()).unwrap();

    let err = match program.parse_and_run(["hello", "greeting", "--help"]) {
        Err(Error::Parse(err)) => err,
        other => panic!("expected a help request, got {other:?}"),
    };
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    let help = err.to_string();
    assert!(help.contains("The greeting reads \"{title} {name}\"."));
    assert!(help.contains("title of the person"));

    let mut listing = program.command();
    let top = listing.render_help().to_string();
    assert!(top.contains("greeting"));
    assert!(top.contains("Print a greeting message."));
}

#[test]
fn user_input_errors_are_passed_through() {
    let mut program = Program::new("hello");
    program.add_command(greeting(), CommandOptions::new()).unwrap();

    let err = program.parse_and_run(["hello", "greeting", "Mr."]).unwrap_err();
    match err {
        Error::Parse(err) => {
            assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument)
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = program.parse_and_run(["hello", "unknown"]).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn dispatch_selects_target_and_shares_root_values() {
    let calls = Rc::new(RefCell::new(Vec::new()));

    let build_calls = Rc::clone(&calls);
    let build = Function::new("build", move |args: &Arguments| {
        build_calls.borrow_mut().push("build");
        args.clone()
    })
    .with_doc("Build the project.\n\nArgs:\n  jobs (int): parallel jobs\n  targets (list[str]): what to build\n")
    .param_with_default("jobs", 1i64)
    .param("targets");

    let clean_calls = Rc::clone(&calls);
    let clean = Function::new("clean", move |args: &Arguments| {
        clean_calls.borrow_mut().push("clean");
        args.clone()
    })
    .with_doc("Remove build outputs.");

    let mut program = Program::new("make");
    program
        .add_argument(
            ArgumentSpec::new("--verbose")
                .with_type(ValueType::Bool)
                .optional()
                .with_help("talk more"),
        )
        .unwrap();
    program.add_command(build, CommandOptions::new()).unwrap();
    let clean = clean.with_signature(docargs_core::Signature::new());
    program.add_command(clean, CommandOptions::new()).unwrap();

    let args = program
        .parse_and_run(["make", "--verbose", "build", "--jobs", "4", "lib", "bin"])
        .unwrap();
    assert!(args.flag("verbose"));
    assert_eq!(args.int("jobs"), Some(4));
    assert_eq!(
        args.list("targets").unwrap(),
        &[Value::Str("lib".into()), Value::Str("bin".into())]
    );

    let args = program.parse_and_run(["make", "clean"]).unwrap();
    assert!(!args.flag("verbose"));
    assert!(!args.contains("jobs"));

    assert_eq!(*calls.borrow(), vec!["build", "clean"]);
}

#[test]
fn excludes_and_kind_policy() {
    let copy = Function::new("copy", |args: &Arguments| args.clone())
        .with_doc("Copy.\n\nArgs:\n  src: source\n  dst: destination\n  debug: internal\n")
        .param("src")
        .param("dst")
        .param_with_default("debug", false);

    let mut program = Program::new("fs");
    program
        .add_command(
            copy,
            CommandOptions::new()
                .named("cp")
                .exclude("debug")
                .kind(KindPolicy::AllOptional),
        )
        .unwrap();

    let merged = program.merged("cp").unwrap();
    assert!(merged.find_argument("debug").is_none());
    assert!(merged.arguments.iter().all(|a| a.kind == Some(ArgKind::Optional)));

    let args = program
        .parse_and_run(["fs", "cp", "--src", "a", "--dst", "b"])
        .unwrap();
    assert_eq!(args.str("src"), Some("a"));
    assert_eq!(args.str("dst"), Some("b"));
    assert!(!args.contains("debug"));

    let err = program.parse_and_run(["fs", "cp", "--src", "a"]).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn missing_documentation_degrades_to_empty_metadata() {
    let bare = Function::new("bare", |args: &Arguments| args.len()).param("value");

    let mut program = Program::new("tool");
    program.add_command(bare, CommandOptions::new()).unwrap();

    let merged = program.merged("bare").unwrap();
    assert_eq!(merged.command.help, "");
    assert!(merged.arguments[0].help.is_none());
    assert_eq!(program.parse_and_run(["tool", "bare", "x"]).unwrap(), 1);
}

#[test]
fn parameter_named_help_is_refused_at_registration() {
    let show = Function::new("show", |args: &Arguments| args.clone())
        .with_doc("Show a topic.\n\nArgs:\n  help: topic to show\n")
        .param("help");

    let mut program = Program::new("app");
    let err = program
        .add_command(show, CommandOptions::new())
        .err()
        .unwrap();
    assert!(err.to_string().contains("clashes with the built-in help flag"));

    // Nothing was registered, so building the clap tree stays valid.
    assert!(program.merged("show").is_none());
    program.command().debug_assert();
}

#[test]
fn renamed_override_avoids_the_help_clash() {
    let show = Function::new("show", |args: &Arguments| args.clone())
        .with_doc("Show a topic.\n\nArgs:\n  host: where to look\n")
        .param("host");

    let mut program = Program::new("app");
    assert!(
        program
            .add_command(
                Function::new("connect", |args: &Arguments| args.clone()).param("host"),
                CommandOptions::new().argument(ArgumentSpec::from_flags(&["-h", "--host"])),
            )
            .is_err()
    );
    program
        .add_command(
            show,
            CommandOptions::new().argument(ArgumentSpec::from_flags(&["-H", "--host"])),
        )
        .unwrap();

    let args = program.parse_and_run(["app", "show", "-H", "db1"]).unwrap();
    assert_eq!(args.str("host"), Some("db1"));
}
