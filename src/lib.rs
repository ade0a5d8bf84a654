//! xcproj-doctor library
//!
//! Integrity diagnostics for the JJYWave Xcode project bundle.
//!
//! This library checks that a project directory still has the expected shape:
//! - Manifest presence, readability and required PBX section markers
//! - Main and test source file counts
//! - Required directories and resource files
//! - Brace balance in a handful of critical source files
//!
//! Nothing is ever modified; the checks only read the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use xcproj_doctor::validate;
//!
//! let issues = validate(std::path::Path::new("."));
//! if issues.is_empty() {
//!     println!("project is healthy");
//! }
//! ```

pub mod checks;
pub mod cli;
pub mod data;
pub mod engine;
pub mod version;

use std::fmt;
use std::path::{Path, PathBuf};

use data::layout::ProjectLayout;
use engine::orchestrator::ProjectValidator;
use engine::result::ValidationReport;

/// Check result indicating the outcome of a validation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// Check passed successfully
    Pass {
        message: String,
        duration_ms: u64,
    },
    /// Check failed. `message` is the issue line, `details` the offending items.
    Fail {
        message: String,
        details: Vec<String>,
        duration_ms: u64,
    },
    /// Check was not evaluated
    Skip {
        reason: String,
    },
}

impl CheckResult {
    pub fn is_fail(&self) -> bool {
        matches!(self, CheckResult::Fail { .. })
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckResult::Pass { message, .. } => write!(f, "PASS: {}", message),
            CheckResult::Fail { message, .. } => write!(f, "FAIL: {}", message),
            CheckResult::Skip { reason } => write!(f, "SKIP: {}", reason),
        }
    }
}

/// Check category for grouping related checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckCategory {
    /// project.pbxproj presence and contents
    Manifest,
    /// Source file counts
    Sources,
    /// Required directories and resource files
    Structure,
    /// Brace balance of critical files
    Syntax,
}

impl fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckCategory::Manifest => write!(f, "Manifest"),
            CheckCategory::Sources => write!(f, "Sources"),
            CheckCategory::Structure => write!(f, "Structure"),
            CheckCategory::Syntax => write!(f, "Syntax"),
        }
    }
}

/// A validation check with its result.
#[derive(Debug, Clone)]
pub struct Check {
    /// Unique identifier (e.g., "MAN-001")
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Check category
    pub category: CheckCategory,
    /// Result of the check (None if not yet executed)
    pub result: Option<CheckResult>,
}

impl Check {
    pub fn new(id: &str, name: &str, category: CheckCategory) -> Self {
        Check {
            id: id.to_string(),
            name: name.to_string(),
            category,
            result: None,
        }
    }

    /// Attach a result to this check
    pub fn with_result(mut self, result: CheckResult) -> Self {
        self.result = Some(result);
        self
    }
}

/// Error types for xcproj-doctor operations.
#[derive(Debug, thiserror::Error)]
pub enum DoctorError {
    /// The working directory does not hold the expected `.xcodeproj` bundle
    #[error("Not in {project} project directory")]
    NotProjectRoot { project: String },

    /// The current working directory could not be determined
    #[error("Cannot determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    /// I/O error on a specific path
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bad command line
    #[error("{0}")]
    InvalidArgument(String),
}

impl DoctorError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        DoctorError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Run every check against `root` using `layout` and return the full report.
pub fn run_validation(root: &Path, layout: &ProjectLayout) -> ValidationReport {
    ProjectValidator::new(layout.clone()).run(root)
}

/// Validate the JJYWave project at `root`.
///
/// Returns the ordered list of issue descriptions. An empty list means the
/// project passed.
pub fn validate(root: &Path) -> Vec<String> {
    run_validation(root, &ProjectLayout::default()).issues()
}
