//! Output formatting tests.
//!
//! Tests for the terminal formatter on real validation reports.

use crate::mocks::{MockProject, MANIFEST};
use std::path::Path;
use xcproj_doctor::cli::output::{OutputFormatter, TerminalFormatter};
use xcproj_doctor::data::layout::ProjectLayout;
use xcproj_doctor::engine::result::ValidationReport;
use xcproj_doctor::{run_validation, Check, CheckCategory, CheckResult};

fn formatter() -> TerminalFormatter {
    TerminalFormatter::new(&ProjectLayout::jjywave(), false, false)
}

fn create_sample_report() -> ValidationReport {
    let mut report = ValidationReport::new(Path::new("/work/JJYWave"));
    report.checks = vec![
        Check::new("MAN-001", "Manifest Presence", CheckCategory::Manifest).with_result(
            CheckResult::Pass {
                message: "Project file present".to_string(),
                duration_ms: 0,
            },
        ),
        Check::new("SRC-001", "Main Source Count", CheckCategory::Sources).with_result(
            CheckResult::Fail {
                message: "Expected 17 main Swift files, found 16".to_string(),
                details: vec!["expected 17".to_string(), "found 16".to_string()],
                duration_ms: 4,
            },
        ),
        Check::new("DIR-001", "Required Directories", CheckCategory::Structure).with_result(
            CheckResult::Fail {
                message: "Missing directories: Tests".to_string(),
                details: vec!["Tests".to_string()],
                duration_ms: 1,
            },
        ),
    ];
    report.total_duration_ms = 7;
    report
}

#[test]
fn test_failure_summary_lists_every_issue_indented() {
    let summary = formatter().summary(&create_sample_report());
    let expected = format!(
        "\n{}\n⚠️  PROJECT VALIDATION FAILED\n❌ Issues detected:\n   ❌ Expected 17 main Swift files, found 16\n   ❌ Missing directories: Tests\n\n💡 Consider comparing with a known good project state",
        "=".repeat(50)
    );
    assert_eq!(summary, expected);
}

#[test]
fn test_full_format_of_sample_report() {
    let output = formatter().format(&create_sample_report());
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines[0], "🔍 JJYWave Project Integrity Validator");
    assert_eq!(lines[2], "✅ Project file present");
    assert_eq!(lines[3], "");
    assert_eq!(lines[4], "=".repeat(50));
    assert_eq!(output.matches("❌ Expected 17 main Swift files, found 16").count(), 1);
    assert_eq!(output.matches("❌ Missing directories: Tests").count(), 1);
}

#[test]
fn test_verbose_adds_ids_and_timings() {
    let verbose = TerminalFormatter::new(&ProjectLayout::jjywave(), false, true);
    let output = verbose.format(&create_sample_report());

    assert!(output.contains("❌ Expected 17 main Swift files, found 16 [SRC-001, 4ms]"));
    assert!(output.contains("1 passed, 2 failed, 0 skipped in 7ms"));
}

#[test]
fn test_healthy_report_formats_pass_banner() {
    let project = MockProject::healthy();
    let report = run_validation(project.root(), &ProjectLayout::default());
    let output = formatter().format(&report);

    assert!(output.contains("✅ All required PBX sections present"));
    assert!(output.contains("✅ All required directories present"));
    assert!(output.contains("✅ All key resource files present"));
    assert!(output.ends_with("✅ No corruption or structural issues detected\n✅ Project is ready for development"));
}

#[test]
fn test_short_circuited_report_prints_no_progress_lines() {
    let project = MockProject::healthy();
    project.remove(MANIFEST);
    let report = run_validation(project.root(), &ProjectLayout::default());

    let printed: Vec<String> = report
        .checks
        .iter()
        .filter_map(|c| formatter().check_line(c))
        .collect();
    assert!(printed.is_empty(), "unexpected lines: {:?}", printed);
}
