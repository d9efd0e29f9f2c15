//! End-to-end tests for the test-scope binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const MATH_RS: &str = r#"
pub fn add(a: u32, b: u32) -> u32 {
    a + b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        assert_eq!(add(1, 2), 3);
    }
}
"#;

const MORE_RS: &str = r#"
pub fn double(a: u32) -> u32 {
    a * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double() {
        assert_eq!(double(2), 4);
    }
}
"#;

fn package_fixture() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    fs::create_dir_all(root.join("src/api")).unwrap();
    fs::write(
        root.join("Cargo.toml"),
        "[package]\nname = \"fixture-pkg\"\nversion = \"0.1.0\"\n",
    )
    .unwrap();
    fs::write(root.join("src/api/math.rs"), MATH_RS).unwrap();
    fs::write(root.join("src/api/more.rs"), MORE_RS).unwrap();
    temp
}

#[test]
fn test_directory_resolution_prints_context() {
    let temp = package_fixture();
    let root = temp.path();

    let mut cmd = Command::cargo_bin("test-scope").unwrap();
    cmd.args([
        "directory",
        root.join("src/api").to_str().unwrap(),
        "--root",
        root.to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("all in directory 'api'"))
        .stdout(predicate::str::contains("target: fixture-pkg"))
        .stdout(predicate::str::contains("filter: api"));
}

#[test]
fn test_package_root_directory_declines() {
    let temp = package_fixture();
    let root = temp.path();

    let mut cmd = Command::cargo_bin("test-scope").unwrap();
    cmd.args([
        "directory",
        root.to_str().unwrap(),
        "--root",
        root.to_str().unwrap(),
    ]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("no matching test target"));
}

#[test]
fn test_selection_resolution_names_the_smallest_suite() {
    let temp = package_fixture();
    let root = temp.path();

    let mut cmd = Command::cargo_bin("test-scope").unwrap();
    cmd.args([
        "selection",
        root.join("src/api").to_str().unwrap(),
        "math::tests",
        "more::tests",
        "--root",
        root.to_str().unwrap(),
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("math::tests and 1 others"))
        .stdout(predicate::str::contains("filter: math::tests more::tests"));
}

#[test]
fn test_single_suite_selection_declines() {
    let temp = package_fixture();
    let root = temp.path();

    let mut cmd = Command::cargo_bin("test-scope").unwrap();
    cmd.args([
        "selection",
        root.join("src/api").to_str().unwrap(),
        "math::tests",
        "--root",
        root.to_str().unwrap(),
    ]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("no matching test target"));
}

#[test]
fn test_json_output_is_machine_readable() {
    let temp = package_fixture();
    let root = temp.path();

    let mut cmd = Command::cargo_bin("test-scope").unwrap();
    cmd.args([
        "directory",
        root.join("src/api").to_str().unwrap(),
        "--root",
        root.to_str().unwrap(),
        "--json",
    ]);
    let assert = cmd.assert().success();
    let output = assert.get_output();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["resolved"]["target"], "fixture-pkg");
}
