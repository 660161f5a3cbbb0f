use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn long_document() -> String {
    let mut lines = vec!["# Heading".to_string(), "- item".to_string(), "> quote".to_string()];
    lines.extend((4..=30).map(|n| format!("line {n}")));
    lines.join("\n")
}

#[test]
fn preview_shows_default_number_of_lines() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, long_document()).unwrap();

    let mut cmd = cargo_bin_cmd!("mdwriter");
    cmd.arg("preview")
        .arg(input_path.as_os_str())
        .arg("--color")
        .arg("never");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("File Information:"))
        .stdout(predicate::str::contains("# Heading"))
        .stdout(predicate::str::contains("line 20"))
        .stdout(predicate::str::contains("line 21").not())
        .stdout(predicate::str::contains("... and 10 more lines"));
}

#[test]
fn preview_respects_lines_flag() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, long_document()).unwrap();

    let mut cmd = cargo_bin_cmd!("mdwriter");
    cmd.arg("preview")
        .arg(input_path.as_os_str())
        .arg("--lines")
        .arg("2")
        .arg("--color")
        .arg("never");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("- item"))
        .stdout(predicate::str::contains("> quote").not())
        .stdout(predicate::str::contains("... and 28 more lines"));
}

#[test]
fn preview_respects_configured_limit() {
    let dir = tempdir().unwrap();
    let input_path = dir.path().join("doc.md");
    fs::write(&input_path, long_document()).unwrap();
    let config_path = dir.path().join("mdwriter.toml");
    fs::write(&config_path, "[preview]\nmax_lines = 29\n").unwrap();

    let mut cmd = cargo_bin_cmd!("mdwriter");
    cmd.arg("preview")
        .arg(input_path.as_os_str())
        .arg("--color")
        .arg("never")
        .arg("--config")
        .arg(config_path.as_os_str());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("line 29"))
        .stdout(predicate::str::contains("... and 1 more lines"));
}
