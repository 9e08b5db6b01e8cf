use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("docs")
        .join("samples")
        .join(name)
}

fn write_grammar(dir: &TempDir, source: &str) -> PathBuf {
    let path = dir.path().join("grammar.sbnf");
    fs::write(&path, source).expect("grammar file to be written");
    path
}

fn sbnf(path: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("sbnf");
    cmd.env_remove("SBNF_OUTPUT__FORMAT").arg(path);
    cmd
}

#[test]
fn prints_the_table_as_sbnf_by_default() {
    sbnf(&sample_path("010-math.sbnf"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r"NUMBER : /\d+/ ;")
                .and(predicate::str::contains("$main : expression EOF ;")),
        );
}

#[test]
fn check_prints_nothing_on_success() {
    sbnf(&sample_path("020-json.sbnf"))
        .arg("--check")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn format_flag_selects_json() {
    sbnf(&sample_path("010-math.sbnf"))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("{")
                .and(predicate::str::contains(r#""declaration": "token""#))
                .and(predicate::str::contains(r#""kind": "ref""#)),
        );
}

#[test]
fn format_flag_selects_yaml() {
    sbnf(&sample_path("040-directives.sbnf"))
        .arg("-f")
        .arg("yaml")
        .assert()
        .success()
        .stdout(predicate::str::contains("declaration: main").and(predicate::str::contains("kind:")));
}

#[test]
fn unknown_format_is_rejected() {
    sbnf(&sample_path("010-math.sbnf"))
        .arg("--format")
        .arg("xml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format 'xml'"));
}

#[test]
fn set_overrides_the_output_format() {
    sbnf(&sample_path("010-math.sbnf"))
        .arg("--set")
        .arg("output.format=json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn config_file_is_layered_over_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let config = dir.path().join("sbnf.toml");
    fs::write(&config, "[output]\nformat = \"yaml\"\n").expect("config file to be written");

    sbnf(&sample_path("030-csv.sbnf"))
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("declaration: main"));
}

#[test]
fn missing_config_file_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    sbnf(&sample_path("010-math.sbnf"))
        .arg("-c")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn syntax_errors_exit_with_failure() {
    let dir = TempDir::new().expect("temp dir");
    let grammar = write_grammar(&dir, "A : 'a' ;\nb : ;\nC : 'c' ;\n");

    sbnf(&grammar)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(
            predicate::str::contains("error[syntax] 2:5")
                .and(predicate::str::contains("1 compile error(s)")),
        );
}

#[test]
fn resolution_errors_exit_with_failure() {
    let dir = TempDir::new().expect("temp dir");
    let grammar = write_grammar(&dir, "$main : MISSING ;\n");

    sbnf(&grammar)
        .assert()
        .code(1)
        .stderr(
            predicate::str::contains("error[resolve] undefined token MISSING")
                .and(predicate::str::contains("1 resolution error(s)")),
        );
}

#[test]
fn no_builtins_leaves_eof_undeclared() {
    let dir = TempDir::new().expect("temp dir");
    let grammar = write_grammar(&dir, "$main : 'x' EOF ;\n");

    sbnf(&grammar).arg("--check").assert().success();
    sbnf(&grammar)
        .arg("--no-builtins")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("undefined token EOF"));
}

#[test]
fn unreadable_input_is_reported() {
    let dir = TempDir::new().expect("temp dir");
    sbnf(&dir.path().join("absent.sbnf"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}
