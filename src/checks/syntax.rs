//! Critical file syntax check (SYN-001).
//!
//! A cheap corruption detector: after removing string literals and comments,
//! every `{` in a critical source file should have a matching `}`. This is a
//! heuristic. Escaped quotes, interpolated strings and raw strings can all
//! fool it, and it makes no attempt to parse Swift.

use crate::data::layout::ProjectLayout;
use crate::{Check, CheckCategory, CheckResult, DoctorError};
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use std::time::Instant;

/// Get all syntax checks
pub fn get_syntax_checks() -> Vec<Check> {
    vec![Check::new("SYN-001", "Critical File Brace Balance", CheckCategory::Syntax)]
}

struct Strippers {
    double_quoted: Regex,
    single_quoted: Regex,
    line_comment: Regex,
    block_comment: Regex,
}

fn strippers() -> &'static Strippers {
    static STRIPPERS: OnceLock<Strippers> = OnceLock::new();
    STRIPPERS.get_or_init(|| Strippers {
        double_quoted: Regex::new(r#""[^"]*""#).expect("static pattern"),
        single_quoted: Regex::new(r"'[^']*'").expect("static pattern"),
        line_comment: Regex::new(r"//.*").expect("static pattern"),
        block_comment: Regex::new(r"(?s)/\*.*?\*/").expect("static pattern"),
    })
}

/// Blank out string literals and drop comments.
///
/// Order matters: quoted strings go first so `//` inside a URL literal is not
/// taken for a comment.
pub fn strip_literals_and_comments(source: &str) -> String {
    let s = strippers();
    let text: Cow<'_, str> = s.double_quoted.replace_all(source, r#""""#);
    let text = s.single_quoted.replace_all(&text, "''").into_owned();
    let text = s.line_comment.replace_all(&text, "").into_owned();
    s.block_comment.replace_all(&text, "").into_owned()
}

/// Count `{` and `}` outside strings and comments
pub fn brace_counts(source: &str) -> (usize, usize) {
    let cleaned = strip_literals_and_comments(source);
    let open = cleaned.matches('{').count();
    let close = cleaned.matches('}').count();
    (open, close)
}

pub fn is_balanced(source: &str) -> bool {
    let (open, close) = brace_counts(source);
    open == close
}

/// Inspect one critical file. `None` means nothing to report.
fn inspect_file(root: &Path, rel: &str) -> Option<String> {
    let path = root.join(rel);
    if !path.exists() {
        tracing::debug!(file = rel, "critical file absent, skipping");
        return None;
    }

    match fs::read_to_string(&path).map_err(|e| DoctorError::io(&path, e)) {
        Ok(content) => {
            let (open, close) = brace_counts(&content);
            tracing::debug!(file = rel, open, close, "brace tally");
            (open != close).then(|| format!("{}: Unbalanced braces", rel))
        }
        Err(e) => Some(format!("{}: Read error - {}", rel, e)),
    }
}

/// Run SYN-001: Critical File Brace Balance
pub fn check_critical_files(root: &Path, layout: &ProjectLayout) -> CheckResult {
    let start = Instant::now();
    let problems: Vec<String> = layout
        .critical_files
        .iter()
        .filter_map(|rel| inspect_file(root, rel))
        .collect();
    let duration_ms = start.elapsed().as_millis() as u64;

    if problems.is_empty() {
        CheckResult::Pass {
            message: "Critical files syntax check passed".to_string(),
            duration_ms,
        }
    } else {
        CheckResult::Fail {
            message: format!("Syntax issues in critical files: {}", problems.join("; ")),
            details: problems,
            duration_ms,
        }
    }
}
