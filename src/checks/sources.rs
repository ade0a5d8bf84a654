//! Source count checks (SRC-001, SRC-002).
//!
//! Walks the whole project tree, splits source files into main and test by
//! path fragment and compares both counts against the expected totals.

use crate::data::layout::ProjectLayout;
use crate::{Check, CheckCategory, CheckResult};
use std::ffi::OsStr;
use std::path::Path;
use std::time::Instant;
use walkdir::{DirEntry, WalkDir};

/// Get all source count checks
pub fn get_source_checks() -> Vec<Check> {
    vec![
        Check::new("SRC-001", "Main Source Count", CheckCategory::Sources),
        Check::new("SRC-002", "Test Source Count", CheckCategory::Sources),
    ]
}

/// Source files found under the root, as root-relative `/`-separated paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInventory {
    pub main: Vec<String>,
    pub test: Vec<String>,
}

/// Regular files, plus symlinks that resolve to a file. Directory links are
/// not descended into.
fn is_source_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Enumerate every source file under `root` and partition it.
///
/// Unreadable directory entries are logged and left out of the counts.
pub fn collect_sources(root: &Path, layout: &ProjectLayout) -> SourceInventory {
    let mut inventory = SourceInventory::default();
    let extension = OsStr::new(layout.source_extension.as_str());

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !is_source_file(&entry) || entry.path().extension() != Some(extension) {
            continue;
        }

        let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let rel_posix = rel.to_string_lossy().replace('\\', "/");

        if layout.is_test_path(&rel_posix) {
            inventory.test.push(rel_posix);
        } else {
            inventory.main.push(rel_posix);
        }
    }

    inventory.main.sort();
    inventory.test.sort();
    tracing::debug!(
        main = inventory.main.len(),
        test = inventory.test.len(),
        "source files enumerated"
    );
    inventory
}

fn check_count(kind: &str, language: &str, expected: usize, found: usize, duration_ms: u64) -> CheckResult {
    if found == expected {
        CheckResult::Pass {
            message: format!("{} {} files: {}", kind, language, found),
            duration_ms,
        }
    } else {
        CheckResult::Fail {
            message: format!(
                "Expected {} {} {} files, found {}",
                expected,
                kind.to_lowercase(),
                language,
                found
            ),
            details: vec![format!("expected {}", expected), format!("found {}", found)],
            duration_ms,
        }
    }
}

/// Run SRC-001 and SRC-002 over one walk of the tree.
///
/// Both results are always produced; a mismatch in one partition does not
/// hide the other.
pub fn check_source_counts(root: &Path, layout: &ProjectLayout) -> (CheckResult, CheckResult) {
    let start = Instant::now();
    let inventory = collect_sources(root, layout);
    let duration_ms = start.elapsed().as_millis() as u64;

    let main = check_count(
        "Main",
        &layout.source_language,
        layout.expected_main_sources,
        inventory.main.len(),
        duration_ms,
    );
    let test = check_count(
        "Test",
        &layout.source_language,
        layout.expected_test_sources,
        inventory.test.len(),
        duration_ms,
    );
    (main, test)
}
