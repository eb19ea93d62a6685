use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn write_project(root: &Path, name: &str, constraint: &str) {
    let dir = root.join("terraform/projects").join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("main.tf"),
        format!("terraform {{\n  required_version = \"{}\"\n}}\n", constraint),
    )
    .unwrap();
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_provider-version-check"))
        .args(args)
        .current_dir(dir)
        .env_remove("TF_VERSION_CHECK_ROOT")
        .env_remove("TF_VERSION_CHECK_PATTERN")
        .env_remove("TF_VERSION_CHECK_EXPECTED")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_exit_zero_when_up_to_date() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path(), "app", "= 0.10.6");

    let output = run_in(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "All Terraform projects are on Terraform version 0.10.6.\n"
    );
}

#[test]
fn test_exit_zero_on_empty_tree() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_exit_one_when_outdated() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path(), "app", "= 0.9.0");
    write_project(temp_dir.path(), "db", "= 0.8.8");
    write_project(temp_dir.path(), "web", "= 0.10.6");

    let output = run_in(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "terraform/projects/app/main.tf, terraform/projects/db/main.tf are not on Terraform version 0.10.6.\n"
    );
}

#[test]
fn test_root_and_version_flags() {
    let temp_dir = TempDir::new().unwrap();
    write_project(temp_dir.path(), "app", "= 0.11.14");
    let root = temp_dir.path().to_str().unwrap();

    let output = run_in(
        Path::new("/"),
        &["--root", root, "--terraform-version", "= 0.11.14"],
    );

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "All Terraform projects are on Terraform version 0.11.14.\n"
    );
}

#[test]
fn test_exit_two_on_invalid_version() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["--terraform-version", "="]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid expected version"));
}

#[test]
fn test_exit_two_on_invalid_pattern() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_in(temp_dir.path(), &["--pattern", "terraform/[projects"]);

    assert_eq!(output.status.code(), Some(2));
}
