//! Structure checks (DIR-001, RES-001).
//!
//! Checks that the source directories and resource files Xcode references
//! are still on disk.

use crate::data::layout::ProjectLayout;
use crate::{Check, CheckCategory, CheckResult};
use std::path::Path;
use std::time::Instant;

/// Get all structure checks
pub fn get_structure_checks() -> Vec<Check> {
    vec![
        Check::new("DIR-001", "Required Directories", CheckCategory::Structure),
        Check::new("RES-001", "Resource Files", CheckCategory::Structure),
    ]
}

/// Entries of `required` that do not exist under `root`, in order
pub fn missing_paths<'a>(root: &Path, required: &'a [String]) -> Vec<&'a str> {
    required
        .iter()
        .map(String::as_str)
        .filter(|rel| !root.join(rel).exists())
        .collect()
}

fn check_presence(root: &Path, required: &[String], what: &str, ok_message: &str) -> CheckResult {
    let start = Instant::now();
    let missing = missing_paths(root, required);
    let duration_ms = start.elapsed().as_millis() as u64;

    if missing.is_empty() {
        CheckResult::Pass {
            message: ok_message.to_string(),
            duration_ms,
        }
    } else {
        tracing::debug!(?missing, "{} missing", what);
        CheckResult::Fail {
            message: format!("Missing {}: {}", what, missing.join(", ")),
            details: missing.iter().map(|s| s.to_string()).collect(),
            duration_ms,
        }
    }
}

/// Run DIR-001: Required Directories
pub fn check_directories(root: &Path, layout: &ProjectLayout) -> CheckResult {
    check_presence(
        root,
        &layout.required_directories,
        "directories",
        "All required directories present",
    )
}

/// Run RES-001: Resource Files
pub fn check_resource_files(root: &Path, layout: &ProjectLayout) -> CheckResult {
    check_presence(
        root,
        &layout.required_files,
        "resource files",
        "All key resource files present",
    )
}
