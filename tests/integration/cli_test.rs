#[path = "../common/mod.rs"]
mod common;

use anyhow::Result;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

use common::{indent_of_first_nested_line, read_json, sql2json, write_sql};

fn stdout_of(args: &[&str], stdin: &str) -> Result<String> {
    let assert = sql2json().args(args).write_stdin(stdin).assert().success();
    Ok(String::from_utf8(assert.get_output().stdout.clone())?)
}

/// SELECT 1 from stdin, two-space indent, no color
#[test]
fn test_select_one_with_two_space_indent() -> Result<()> {
    let out = stdout_of(&["--no-color", "--indent", "2"], "SELECT 1;")?;

    assert!(out.ends_with("}\n"), "missing trailing newline: {:?}", out);
    assert!(!out.ends_with("\n\n"));
    assert!(!out.contains('\x1b'), "color escapes with --no-color");
    assert_eq!(indent_of_first_nested_line(&out), Some("  "));
    assert!(out.contains("\"Select\""), "AST node missing: {}", out);

    let minified = stdout_of(&["--no-color", "--no-pretty"], "SELECT 1;")?;
    assert_eq!(minified.lines().count(), 1);

    let pretty: Value = serde_json::from_str(&out)?;
    let compact: Value = serde_json::from_str(&minified)?;
    assert_eq!(pretty, compact);
    Ok(())
}

#[test]
fn test_space_indent_widths() -> Result<()> {
    for width in [0usize, 1, 4, 8] {
        let indent = width.to_string();
        let out = stdout_of(&["--no-color", "--indent", &indent], "SELECT a FROM t")?;
        let expected = " ".repeat(width);
        assert_eq!(indent_of_first_nested_line(&out), Some(expected.as_str()), "width {}", width);
    }
    Ok(())
}

#[test]
fn test_tab_indent_without_color() -> Result<()> {
    let out = stdout_of(&["--no-color"], "SELECT 1")?;
    assert_eq!(indent_of_first_nested_line(&out), Some("\t"));
    assert!(out.lines().nth(2).is_some_and(|line| line.starts_with("\t\t")));
    Ok(())
}

#[test]
fn test_tab_indent_with_color_degrades_to_one_space() -> Result<()> {
    let out = stdout_of(&["--indent", "tab"], "SELECT 1")?;
    assert!(!out.contains('\t'));
    assert!(out.contains('\x1b'));
    assert_eq!(indent_of_first_nested_line(&out), Some(" "));
    Ok(())
}

#[test]
fn test_minified_colored_output() -> Result<()> {
    let out = stdout_of(&["--no-pretty"], "SELECT 1")?;
    assert!(out.contains("\x1b["));
    assert_eq!(out.lines().count(), 1);
    assert!(out.ends_with('\n'));
    Ok(())
}

#[test]
fn test_reads_positional_file() -> Result<()> {
    let dir = tempdir()?;
    let path = write_sql(&dir, "query.sql", "UPDATE users SET name = 'x' WHERE id = 1;")?;
    let out = stdout_of(&["--no-color", "--no-pretty", path.to_str().unwrap()], "")?;
    let value: Value = serde_json::from_str(&out)?;
    assert!(value["stmts"][0].get("Update").is_some(), "got {}", out);
    Ok(())
}

#[test]
fn test_out_file_is_pretty_even_with_no_pretty() -> Result<()> {
    let dir = tempdir()?;
    let out_path = dir.path().join("somefile.json");

    let assert = sql2json()
        .args(["--no-pretty", "--no-color", "--indent", "2", "--out", out_path.to_str().unwrap()])
        .write_stdin("SELECT 1;")
        .assert()
        .success();
    assert!(assert.get_output().stdout.is_empty());

    let written = fs::read_to_string(&out_path)?;
    assert!(written.starts_with("{\n  \""), "not indented: {:?}", written);
    assert!(written.ends_with("}\n"));
    read_json(&out_path)?;
    Ok(())
}

#[test]
fn test_two_positionals_are_a_usage_error() -> Result<()> {
    let dir = tempdir()?;
    let a = write_sql(&dir, "a.sql", "SELECT 1")?;
    let b = write_sql(&dir, "b.sql", "SELECT 2")?;
    let out_path = dir.path().join("never.json");

    let assert = sql2json()
        .args([a.to_str().unwrap(), b.to_str().unwrap(), "--out", out_path.to_str().unwrap()])
        .assert()
        .failure()
        .code(1);
    let output = assert.get_output();
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(output.stdout.is_empty());
    assert!(err.starts_with("Error: Too many positional arguments"), "stderr: {}", err);
    assert!(!out_path.exists());
    Ok(())
}

#[test]
fn test_invalid_sql_writes_nothing() -> Result<()> {
    let assert = sql2json()
        .write_stdin("SELEC 1")
        .assert()
        .failure()
        .code(1);
    let output = assert.get_output();
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(output.stdout.is_empty());
    assert!(err.starts_with("Error: Failed to parse SQL:"), "stderr: {}", err);
    assert_eq!(err.lines().count(), 1);
    Ok(())
}

#[test]
fn test_invalid_sql_leaves_no_output_file() -> Result<()> {
    let dir = tempdir()?;
    let out_path = dir.path().join("tree.json");
    sql2json()
        .args(["--out", out_path.to_str().unwrap()])
        .write_stdin("SELEC 1")
        .assert()
        .failure()
        .code(1);
    assert!(!out_path.exists());
    Ok(())
}

#[test]
fn test_invalid_indent_is_rejected() -> Result<()> {
    let assert = sql2json()
        .args(["--indent", "wide"])
        .write_stdin("SELECT 1")
        .assert()
        .failure()
        .code(1);
    let err = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(err.contains("Invalid value for --indent: 'wide'"), "stderr: {}", err);
    Ok(())
}

#[test]
fn test_oversized_indent_is_a_config_error() -> Result<()> {
    let huge = usize::MAX.to_string();
    for color in [true, false] {
        let mut cmd = sql2json();
        cmd.args(["--indent", &huge]);
        if !color {
            cmd.arg("--no-color");
        }
        let assert = cmd.write_stdin("SELECT 1").assert().failure().code(1);
        let output = assert.get_output();
        let err = String::from_utf8_lossy(&output.stderr);
        assert!(output.stdout.is_empty());
        assert_eq!(err, format!("Error: Invalid value for --indent: '{}'\n", huge));
    }
    Ok(())
}

#[test]
fn test_directory_input_is_not_a_regular_file() -> Result<()> {
    let dir = tempdir()?;
    let assert = sql2json()
        .arg(dir.path())
        .assert()
        .failure()
        .code(1);
    let err = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(err.contains("is not a regular file"), "stderr: {}", err);
    Ok(())
}

#[test]
fn test_missing_input_file() -> Result<()> {
    let dir = tempdir()?;
    let assert = sql2json()
        .arg(dir.path().join("absent.sql"))
        .assert()
        .failure()
        .code(1);
    let err = String::from_utf8_lossy(&assert.get_output().stderr);
    assert!(err.starts_with("Error: Cannot access file"), "stderr: {}", err);
    Ok(())
}

#[test]
fn test_unknown_flag_is_a_single_error_line() -> Result<()> {
    let assert = sql2json()
        .arg("--bogus")
        .assert()
        .failure()
        .code(1);
    let output = assert.get_output();
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(output.stdout.is_empty());
    assert!(err.starts_with("Error: "), "stderr: {}", err);
    assert_eq!(err.lines().count(), 1);
    Ok(())
}

#[test]
fn test_help_exits_successfully() {
    let assert = sql2json().arg("--help").assert().success();
    let out = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(out.contains("--use-clipboard"));
    assert!(out.contains("--indent"));
}
