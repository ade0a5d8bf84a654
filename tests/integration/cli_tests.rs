//! CLI integration tests.
//!
//! Tests for argument parsing and for the binary run from a fixture
//! directory.

use crate::mocks::{MockProject, MANIFEST};
use std::path::Path;
use std::process::{Command as Process, Output};
use xcproj_doctor::cli::args::{Args, Command};

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Process::new(env!("CARGO_BIN_EXE_xcproj-doctor"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("run xcproj-doctor")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_default_args() {
    let args = Args::parse_from(&[]).unwrap();
    assert_eq!(args.command, Command::Check);
    assert!(!args.verbose);
}

#[test]
fn test_list_command() {
    let args = Args::parse_from(&["list".to_string()]).unwrap();
    assert_eq!(args.command, Command::List);
}

#[test]
fn test_version_flag() {
    let args = Args::parse_from(&["--version".to_string()]).unwrap();
    assert_eq!(args.command, Command::Version);
}

#[test]
fn test_binary_healthy_project_exits_zero() {
    let project = MockProject::healthy();
    let output = run_in(project.root(), &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "stdout:\n{}", text);
    assert!(text.starts_with("🔍 JJYWave Project Integrity Validator\n"));
    assert!(text.contains("✅ Project file readable"));
    assert!(text.contains("✅ Main Swift files: 17"));
    assert!(text.contains("✅ Test Swift files: 20"));
    assert!(text.contains("✅ Critical files syntax check passed"));
    assert!(text.contains(&"=".repeat(50)));
    assert!(text.contains("🎉 PROJECT VALIDATION PASSED"));
    assert!(!text.contains("❌"));
}

#[test]
fn test_binary_broken_project_exits_one() {
    let project = MockProject::healthy();
    project.remove("README.md");
    let output = run_in(project.root(), &["check"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("⚠️  PROJECT VALIDATION FAILED"));
    assert!(text.contains("❌ Issues detected:"));
    assert!(text.contains("   ❌ Missing resource files: README.md\n"));
    assert_eq!(text.matches("Missing resource files").count(), 1);
    assert!(text.contains("💡 Consider comparing with a known good project state"));
}

#[test]
fn test_binary_missing_manifest_reports_only_that() {
    let project = MockProject::healthy();
    project.remove(MANIFEST);
    project.remove("Tests");
    let output = run_in(project.root(), &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("   ❌ JJYWave.xcodeproj/project.pbxproj missing\n"));
    assert!(!text.contains("Missing directories"));
    assert!(!text.contains("Swift files"));
}

#[test]
fn test_binary_outside_project_root() {
    let project = MockProject::empty();
    let output = run_in(project.root(), &[]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("❌ Not in JJYWave project directory"));
    assert!(text.contains("Please run this tool from the JJYWave project root"));
    assert!(!text.contains("Project Integrity Validator"));
    assert!(!text.contains("✅"));
    assert!(!text.contains("PROJECT VALIDATION"));
}

#[test]
fn test_binary_verbose_shows_skipped_checks() {
    let project = MockProject::healthy();
    project.remove(MANIFEST);
    let output = run_in(project.root(), &["--verbose"]);
    let text = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(text.contains("[SYN-001]"));
    assert!(text.contains("skipped"));
}

#[test]
fn test_binary_list_and_version() {
    let project = MockProject::empty();

    let list = run_in(project.root(), &["list"]);
    assert_eq!(list.status.code(), Some(0));
    let text = stdout(&list);
    for id in ["MAN-001", "MAN-003", "SRC-002", "DIR-001", "RES-001", "SYN-001"] {
        assert!(text.contains(id), "missing {} in:\n{}", id, text);
    }

    let version = run_in(project.root(), &["-V"]);
    assert_eq!(version.status.code(), Some(0));
    assert!(stdout(&version).starts_with("xcproj-doctor "));
}

#[test]
fn test_binary_unknown_option_exits_two() {
    let project = MockProject::empty();
    let output = run_in(project.root(), &["--bogus"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown option: '--bogus'"));
}
