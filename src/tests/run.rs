use std::io::Write;

use clap::error::ErrorKind;
use clap::ArgMatches;
use tempfile::{tempdir, NamedTempFile};

use crate::cli::build_cli;
use crate::keywords::TableErrKind;
use crate::report::ReportFormat;
use crate::result::{DriverErrKind, DriverResult};
use crate::run::{build_config, run};

fn matches(args: &[&str]) -> ArgMatches {
    let mut argv = vec!["ctrans"];
    argv.extend_from_slice(args);
    build_cli().try_get_matches_from(argv).unwrap()
}

fn execute(args: &[&str], stdin: &str) -> (DriverResult, String) {
    let mut input = stdin.as_bytes();
    let mut out = vec![];
    let result = run(&matches(args), &mut input, &mut out);
    (result, String::from_utf8(out).unwrap())
}

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

// Config --------------------------------------------------------------

#[test]
fn config_defaults() {
    let config = build_config(&matches(&[])).unwrap();
    assert_eq!(config.debug(), Ok(false));
    assert_eq!(config.quiet(), Ok(false));
    assert_eq!(config.format(), Ok(ReportFormat::Text));
    assert_eq!(config.max_token_len(), Ok(Some(99)));
}

#[test]
fn config_from_args() {
    let config = build_config(&matches(&["-d", "-q", "-f", "summary", "-m", "7"])).unwrap();
    assert_eq!(config.debug(), Ok(true));
    assert_eq!(config.quiet(), Ok(true));
    assert_eq!(config.format(), Ok(ReportFormat::Summary));
    assert_eq!(config.max_token_len(), Ok(Some(7)));
}

#[test]
fn config_zero_max_token_len() {
    let config = build_config(&matches(&["--max-token-len", "0"])).unwrap();
    assert_eq!(config.max_token_len(), Ok(None));
}

#[test]
fn unknown_format_is_rejected() {
    let err = build_cli().try_get_matches_from(["ctrans", "-f", "html"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
}

#[test]
fn code_conflicts_with_files() {
    let err = build_cli()
        .try_get_matches_from(["ctrans", "-c", "int x;", "main.c"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
}

// Run -----------------------------------------------------------------

#[test]
fn run_code() {
    let (result, output) = execute(&["-f", "plain", "-c", "return 0; // if"], "");
    assert_eq!(result.unwrap(), 1);
    assert_eq!(output, "return\tretornar\n");
}

#[test]
fn run_reads_stdin_without_files() {
    let (result, output) = execute(&["-f", "plain"], "if (x) /* for */ return;");
    assert_eq!(result.unwrap(), 2);
    assert_eq!(output, "if\tsi\nreturn\tretornar\n");
}

#[test]
fn run_dash_reads_stdin() {
    let file = source_file("int x;");
    let path = file.path().to_str().unwrap();
    let (result, output) = execute(&["-f", "plain", path, "-"], "char c;");
    assert_eq!(result.unwrap(), 2);
    assert_eq!(output, "int\tentero\nchar\tcaracter\n");
}

#[test]
fn run_files_in_order() {
    let first = source_file("while (1) {}");
    let second = source_file("do {} while (0);");
    let (result, output) = execute(
        &[
            "-f",
            "plain",
            first.path().to_str().unwrap(),
            second.path().to_str().unwrap(),
        ],
        "",
    );
    assert_eq!(result.unwrap(), 3);
    assert_eq!(output, "while\tmientras\ndo\thacer\nwhile\tmientras\n");
}

#[test]
fn run_stops_at_first_missing_file() {
    let good = source_file("goto end;");
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.c");
    let good_path = good.path().to_str().unwrap();
    let (result, output) =
        execute(&["-f", "plain", good_path, missing.to_str().unwrap(), good_path], "");
    let err = result.unwrap_err();
    assert!(matches!(err.kind, DriverErrKind::CouldNotReadSourceFile(_, _)));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(output, "goto\tir_a\n");
}

#[test]
fn run_list_keywords_exits_early() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("never-read.c");
    let (result, output) = execute(&["--list-keywords", missing.to_str().unwrap()], "if");
    assert_eq!(result.unwrap(), 0);
    assert_eq!(output.lines().count(), 37);
    assert_eq!(output.lines().nth(13), Some("for\tpara"));
}

#[test]
fn run_with_table_file() {
    let table = source_file("def = definir\nreturn = devolver\n");
    let path = table.path().to_str().unwrap();
    let (result, output) = execute(&["-t", path, "-f", "plain", "-c", "def f(): return 1"], "");
    assert_eq!(result.unwrap(), 2);
    assert_eq!(output, "def\tdefinir\nreturn\tdevolver\n");
}

#[test]
fn run_with_invalid_table_file() {
    let table = source_file("def definir\n");
    let path = table.path().to_str().unwrap();
    let (result, output) = execute(&["-t", path, "-c", "def"], "");
    let err = result.unwrap_err();
    assert!(matches!(err.kind, DriverErrKind::Table(TableErrKind::InvalidLine(1, _))));
    assert_eq!(err.exit_code(), 1);
    assert!(output.is_empty());
}

#[test]
fn run_zero_max_token_len_removes_limit() {
    let long = "a".repeat(120);
    let table = source_file(format!("{long} = largo\n").as_str());
    let path = table.path().to_str().unwrap();
    let code = format!("{long};");

    let (result, _) = execute(&["-t", path, "-f", "plain", "-c", code.as_str()], "");
    assert_eq!(result.unwrap(), 0);

    let (result, output) =
        execute(&["-t", path, "-f", "plain", "-m", "0", "-c", code.as_str()], "");
    assert_eq!(result.unwrap(), 1);
    assert_eq!(output, format!("{long}\tlargo\n"));
}
