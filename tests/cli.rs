// End-to-end tests for the nbtoc binary.

use std::fs;
use std::path::PathBuf;

use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn nbtoc() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("nbtoc")
}

/// Full notebook with markdown, code, raw and string-source cells
#[test]
fn test_prints_full_toc() {
    let expected = "\
# Table of contents
- [Common statistical tests are linear models](#Common-statistical-tests-are-linear-models)
  - [1 The simplicity underlying common tests](#1-The-simplicity-underlying-common-tests)
    - [1.1 Pearson and Spearman correlation](#1.1-Pearson-and-Spearman-correlation)
      - [Theory: As linear models](#Theory:-As-linear-models)
  - [2 One mean](#2-One-mean)
    - [2.1 One sample t-test and Wilcoxon signed-rank](#2.1-One-sample-t-test-and-Wilcoxon-signed-rank)
";

    nbtoc()
        .arg(fixture("tests-as-linear.ipynb"))
        .assert()
        .success()
        .stdout(expected)
        .stderr("");
}

/// Code-cell comments never show up, even when they look like headings
#[test]
fn test_code_cells_ignored() {
    nbtoc()
        .arg(fixture("tests-as-linear.ipynb"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Imports").not())
        .stdout(predicate::str::contains("Raw cells").not());
}

/// --max-level 2 keeps # and ## only
#[test]
fn test_max_level() {
    let expected = "\
# Table of contents
- [Common statistical tests are linear models](#Common-statistical-tests-are-linear-models)
  - [1 The simplicity underlying common tests](#1-The-simplicity-underlying-common-tests)
  - [2 One mean](#2-One-mean)
";

    nbtoc()
        .args(["--max-level", "2"])
        .arg(fixture("tests-as-linear.ipynb"))
        .assert()
        .success()
        .stdout(expected);
}

/// Alternate title lines
#[test]
fn test_title_styles() {
    nbtoc()
        .args(["--title", "contents"])
        .arg(fixture("tests-as-linear.ipynb"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Contents\n- [Common"));

    nbtoc()
        .args(["--title", "none"])
        .arg(fixture("tests-as-linear.ipynb"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("- [Common"));
}

/// A notebook with no markdown headings prints only the title
#[test]
fn test_no_headings_title_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plain.ipynb");
    fs::write(
        &path,
        r##"{"cells": [{"cell_type": "markdown", "source": ["just text\n", "#tag"]}]}"##,
    )
    .unwrap();

    nbtoc()
        .arg(&path)
        .assert()
        .success()
        .stdout("# Table of contents\n");
}

/// Missing file: diagnostic with suggestion, non-zero exit, nothing on stdout
#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("analysis.ipynb"), r#"{"cells": []}"#).unwrap();

    nbtoc()
        .arg(dir.path().join("analysis.ipnyb"))
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with("error:"))
        .stderr(predicate::str::contains("not found"))
        .stderr(predicate::str::contains("did you mean: analysis.ipynb?"));
}

/// Not JSON at all
#[test]
fn test_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.ipynb");
    fs::write(&path, "{\"cells\": [").unwrap();

    nbtoc()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("not valid JSON"));
}

/// JSON without the notebook shape aborts with no partial output
#[test]
fn test_malformed_notebook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.ipynb");
    fs::write(
        &path,
        r##"{"cells": [{"cell_type": "markdown", "source": ["# Fine"]}, {"cell_type": "markdown"}]}"##,
    )
    .unwrap();

    nbtoc()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("malformed notebook: cell 1 has no `source`"));
}

/// Missing positional argument is a usage error
#[test]
fn test_requires_notebook_arg() {
    nbtoc().assert().failure().code(2);
}

/// --verbose logs to stderr only; stdout stays the TOC
#[test]
fn test_verbose_logs_to_stderr() {
    nbtoc()
        .arg("--verbose")
        .args(["--max-level", "1"])
        .arg(fixture("tests-as-linear.ipynb"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Table of contents\n- [Common"))
        .stderr(predicate::str::contains("skipping cell"))
        .stderr(predicate::str::contains("heading deeper than max level"));
}

/// Completion script generation
#[test]
fn test_completions() {
    nbtoc()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nbtoc"));
}
