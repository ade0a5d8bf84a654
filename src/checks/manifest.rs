//! Manifest checks (MAN-001 through MAN-003).
//!
//! Checks that project.pbxproj exists, is readable text and still carries
//! the PBX section headers Xcode writes for every project.

use crate::data::layout::ProjectLayout;
use crate::{Check, CheckCategory, CheckResult, DoctorError};
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Get all manifest checks
pub fn get_manifest_checks() -> Vec<Check> {
    vec![
        Check::new("MAN-001", "Manifest Presence", CheckCategory::Manifest),
        Check::new("MAN-002", "Manifest Readability", CheckCategory::Manifest),
        Check::new("MAN-003", "PBX Section Markers", CheckCategory::Manifest),
    ]
}

/// Run MAN-001: Manifest Presence
pub fn check_manifest_exists(root: &Path, layout: &ProjectLayout) -> CheckResult {
    let start = Instant::now();
    let path = layout.manifest_path(root);
    let duration_ms = start.elapsed().as_millis() as u64;

    if path.exists() {
        CheckResult::Pass {
            message: "Project file present".to_string(),
            duration_ms,
        }
    } else {
        CheckResult::Fail {
            message: format!("{} missing", layout.manifest_relative()),
            details: vec![layout.manifest_relative()],
            duration_ms,
        }
    }
}

/// Read the manifest as UTF-8 text
pub fn read_manifest(path: &Path) -> Result<String, DoctorError> {
    fs::read_to_string(path).map_err(|e| DoctorError::io(path, e))
}

/// Run MAN-002: Manifest Readability
///
/// Returns the manifest text alongside the result so the section check can
/// reuse it without a second read.
pub fn check_manifest_readable(root: &Path, layout: &ProjectLayout) -> (CheckResult, Option<String>) {
    let start = Instant::now();
    let path = layout.manifest_path(root);

    match read_manifest(&path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), bytes = content.len(), "manifest loaded");
            let result = CheckResult::Pass {
                message: "Project file readable".to_string(),
                duration_ms: start.elapsed().as_millis() as u64,
            };
            (result, Some(content))
        }
        Err(e) => {
            let result = CheckResult::Fail {
                message: format!("Cannot read project.pbxproj: {}", e),
                details: vec![e.to_string()],
                duration_ms: start.elapsed().as_millis() as u64,
            };
            (result, None)
        }
    }
}

/// Section markers from `required` that do not occur in `content`, in order
pub fn missing_sections<'a>(content: &str, required: &'a [String]) -> Vec<&'a str> {
    required
        .iter()
        .map(String::as_str)
        .filter(|marker| !content.contains(marker))
        .collect()
}

/// Run MAN-003: PBX Section Markers
pub fn check_sections(content: &str, layout: &ProjectLayout) -> CheckResult {
    let start = Instant::now();
    let missing = missing_sections(content, &layout.required_sections);
    let duration_ms = start.elapsed().as_millis() as u64;

    if missing.is_empty() {
        CheckResult::Pass {
            message: "All required PBX sections present".to_string(),
            duration_ms,
        }
    } else {
        CheckResult::Fail {
            message: format!("Missing project sections: {}", missing.join(", ")),
            details: missing.iter().map(|s| s.to_string()).collect(),
            duration_ms,
        }
    }
}
