//! CLI Interface Tests
//!
//! These tests run the minit binary against the fixture programs and check
//! its output streams and exit status.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get the path to the fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Get the path to the minit binary
fn minit_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_minit"))
}

/// A command isolated from the caller's environment and config files.
fn minit(dir: &TempDir) -> Command {
    let mut cmd = Command::new(minit_bin());
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env_remove("MINIT_CONFIG")
        .env_remove("MINIT_VERBOSE")
        .env_remove("MINIT_LOG")
        .env("MINIT_NO_COLOR", "true");
    cmd
}

#[test]
fn test_cli_help() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    minit(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage").and(predicate::str::contains("lex")));
}

#[test]
fn test_cli_version() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    minit(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_lex_clean_program() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    minit(&dir)
        .arg("lex")
        .arg(fixtures_dir().join("clean.mc"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2:1 ID program\n"))
        .stdout(predicate::str::contains("7:11 RELOP $df"))
        .stdout(predicate::str::contains("12:9 LITERAL \"total:\""))
        .stdout(predicate::str::ends_with("EOF\n"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_lex_errors_exit_with_one() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    minit(&dir)
        .arg("lex")
        .arg(fixtures_dir().join("errors.mc"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("2:1 ID y"))
        .stderr(predicate::str::contains("invalid float literal"))
        .stderr(predicate::str::contains("lexical error[E0001]: invalid character"))
        .stderr(predicate::str::contains("unterminated literal"))
        .stderr(predicate::str::contains("errors.mc:2:6"));
}

#[test]
fn test_lex_json() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let output = minit(&dir)
        .args(["lex", "--format", "json"])
        .arg(fixtures_dir().join("clean.mc"))
        .output()
        .expect("Failed to run minit");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let tokens: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(tokens[0]["kind"], "ID");
    assert_eq!(tokens[0]["reserved"], true);
    assert!(tokens[0]["file"].as_str().unwrap().ends_with("clean.mc"));
    assert_eq!(tokens.last().unwrap()["kind"], "EOF");
}

#[test]
fn test_check_summary() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    minit(&dir)
        .arg("check")
        .arg(fixtures_dir().join("clean.mc"))
        .arg(fixtures_dir().join("errors.mc"))
        .assert()
        .code(1)
        .stdout("2 file(s) checked, 3 diagnostic(s)\n");
}

#[test]
fn test_check_missing_file() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    minit(&dir)
        .args(["check", "does-not-exist.mc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Cannot open does-not-exist.mc"));
}

#[test]
fn test_config_file_reserved_words_and_limit() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        "format = \"json\"\n[lexer]\nreserved_words = [\"x\"]\nmax_errors = 1\n",
    )
    .unwrap();

    let output = minit(&dir)
        .arg("--config")
        .arg(&config)
        .arg("lex")
        .arg(fixtures_dir().join("errors.mc"))
        .output()
        .expect("Failed to run minit");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let first: serde_json::Value = serde_json::from_str(stdout.lines().next().unwrap()).unwrap();
    assert_eq!(first["lexeme"], "x");
    assert_eq!(first["reserved"], true);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1);
}

#[test]
fn test_config_in_current_directory() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("minit.toml"), "[lexer]\nreserved_words = [\"9x\"]\n").unwrap();

    minit(&dir)
        .arg("check")
        .arg(fixtures_dir().join("clean.mc"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Reserved word is not an identifier"));
}

#[test]
fn test_format_flag_overrides_config() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("minit.toml"), "format = \"json\"\n").unwrap();

    minit(&dir)
        .args(["lex", "--format", "text"])
        .arg(fixtures_dir().join("clean.mc"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("2:1 ID program"));
}

#[test]
fn test_check_prints_help_for_bad_assignment() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let source = dir.path().join("assign.mc");
    std::fs::write(&source, "total <= 1;\n").unwrap();

    minit(&dir)
        .arg("check")
        .arg(&source)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("lexical error[E0006]: invalid operator"))
        .stderr(predicate::str::contains("= help: assignment is written `<-`"))
        .stdout("1 file(s) checked, 1 diagnostic(s)\n");
}
