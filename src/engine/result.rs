//! Result aggregation and reporting.
//!
//! Collects check results in execution order and derives the issue list and
//! summary from them.

use crate::{Check, CheckResult};
use std::path::{Path, PathBuf};

/// Result summary statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSummary {
    pub passed: u32,
    pub failed: u32,
    pub skipped: u32,
    pub total: u32,
    pub total_duration_ms: u64,
}

/// Validation report containing all check results
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub root: PathBuf,
    pub checks: Vec<Check>,
    pub total_duration_ms: u64,
}

impl ValidationReport {
    /// Create a new empty report for `root`
    pub fn new(root: &Path) -> Self {
        ValidationReport {
            root: root.to_path_buf(),
            checks: Vec::new(),
            total_duration_ms: 0,
        }
    }

    /// Issue descriptions, one per failed check, in execution order
    pub fn issues(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter_map(|c| match &c.result {
                Some(CheckResult::Fail { message, .. }) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    /// True when no check failed
    pub fn is_success(&self) -> bool {
        !self.checks.iter().any(|c| c.result.as_ref().is_some_and(CheckResult::is_fail))
    }

    /// Look up a check by ID
    pub fn get(&self, id: &str) -> Option<&Check> {
        self.checks.iter().find(|c| c.id == id)
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();

        for check in &self.checks {
            summary.total += 1;

            match &check.result {
                Some(CheckResult::Pass { duration_ms, .. }) => {
                    summary.passed += 1;
                    summary.total_duration_ms += duration_ms;
                }
                Some(CheckResult::Fail { duration_ms, .. }) => {
                    summary.failed += 1;
                    summary.total_duration_ms += duration_ms;
                }
                Some(CheckResult::Skip { .. }) | None => {
                    summary.skipped += 1;
                }
            }
        }

        summary
    }
}

/// Result aggregator for collecting check results
pub struct ResultAggregator {
    root: PathBuf,
    checks: Vec<Check>,
}

impl ResultAggregator {
    /// Create a new result aggregator
    pub fn new(root: &Path) -> Self {
        ResultAggregator {
            root: root.to_path_buf(),
            checks: Vec::new(),
        }
    }

    /// Add a completed check result
    pub fn add_result(&mut self, check: Check) {
        self.checks.push(check);
    }

    /// Create final validation report
    pub fn into_report(self, total_duration_ms: u64) -> ValidationReport {
        ValidationReport {
            root: self.root,
            checks: self.checks,
            total_duration_ms,
        }
    }
}
