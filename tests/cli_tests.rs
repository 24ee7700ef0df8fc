use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const USAGE_HEADER: &str = "用法 | Usage:";

fn codemeld() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("codemeld"))
}

#[test]
fn no_arguments_print_usage_and_fail() {
    codemeld()
        .assert()
        .code(1)
        .stdout(predicate::str::contains(USAGE_HEADER));
}

#[test]
fn two_positional_arguments_print_usage_and_fail() {
    codemeld()
        .arg("a.txt")
        .arg("b.txt")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(USAGE_HEADER));
}

#[test]
fn flag_without_input_prints_usage_and_fails() {
    codemeld()
        .arg("-t")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(USAGE_HEADER));
}

#[test]
fn help_prints_usage_and_succeeds() {
    for flag in ["-h", "--help"] {
        codemeld()
            .arg(flag)
            .assert()
            .code(0)
            .stdout(predicate::str::contains(USAGE_HEADER));
    }
}

#[test]
fn version_prints_version_and_succeeds() {
    codemeld()
        .arg("-V")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn empty_input_reports_bilingual_error_and_fails() {
    codemeld()
        .arg("")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Error / 错误: No file paths provided. / 未提供文件路径。",
        ))
        .stdout(predicate::str::contains(USAGE_HEADER).not());
}

#[test]
fn mixed_absolute_and_relative_paths_fail_before_manifest() {
    codemeld()
        .arg("/abs/a.txt rel.txt")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error / 错误: "))
        .stdout(predicate::str::contains("File(s):").not());
}

#[test]
fn input_starting_with_hyphen_is_melded() {
    let temp = tempdir().unwrap();
    fs::write(temp.path().join("-notes.md"), "# notes").unwrap();
    fs::write(temp.path().join("other.md"), "other").unwrap();

    // The clipboard may be unavailable, so only the manifest printed before the copy is checked.
    codemeld()
        .current_dir(temp.path())
        .arg("-notes.md other.md")
        .assert()
        .stdout(predicate::str::contains(
            "Root path: .\n\n2 File(s):\n  - -notes.md\n  - other.md\n",
        ))
        .stdout(predicate::str::contains(USAGE_HEADER).not());
}
