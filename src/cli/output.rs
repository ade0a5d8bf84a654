//! Output formatting for xcproj-doctor.
//!
//! Human-readable terminal output only: a banner, one status line per check
//! as it completes, and a summary block listing every issue.
//!
//! Color is optional and applied only to the glyph-prefixed lines; the text
//! itself is identical with and without it.

use crate::data::layout::ProjectLayout;
use crate::engine::result::ValidationReport;
use crate::{Check, CheckResult};

/// Width of the separator printed before the summary
const SEPARATOR_WIDTH: usize = 50;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> String;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
    project_name: String,
}

impl TerminalFormatter {
    pub fn new(layout: &ProjectLayout, color: bool, verbose: bool) -> Self {
        TerminalFormatter {
            color,
            verbose,
            project_name: layout.project_name.clone(),
        }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn gray(&self, text: &str) -> String {
        self.colorize(text, "90")
    }

    /// Title and underline printed before any check runs
    pub fn header(&self) -> String {
        let title = format!("🔍 {} Project Integrity Validator", self.project_name);
        let underline = "=".repeat(title.chars().count());
        format!("{}\n{}", title, underline)
    }

    /// Progress line for one completed check.
    ///
    /// Failures are reported once, in the summary, so failed and skipped
    /// checks produce no line unless verbose.
    pub fn check_line(&self, check: &Check) -> Option<String> {
        let suffix = |duration_ms: u64| {
            if self.verbose {
                format!(" [{}, {}ms]", check.id, duration_ms)
            } else {
                String::new()
            }
        };

        match &check.result {
            Some(CheckResult::Pass { message, duration_ms }) => {
                Some(self.green(&format!("✅ {}{}", message, suffix(*duration_ms))))
            }
            Some(CheckResult::Fail { message, duration_ms, .. }) if self.verbose => {
                Some(self.red(&format!("❌ {}{}", message, suffix(*duration_ms))))
            }
            Some(CheckResult::Skip { reason }) if self.verbose => Some(self.gray(&format!(
                "⏭  {}: skipped ({}) [{}]",
                check.name, reason, check.id
            ))),
            Some(CheckResult::Fail { .. }) | Some(CheckResult::Skip { .. }) | None => None,
        }
    }

    /// Separator plus the pass or fail banner
    pub fn summary(&self, report: &ValidationReport) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&"=".repeat(SEPARATOR_WIDTH));
        output.push('\n');

        let issues = report.issues();
        if issues.is_empty() {
            output.push_str("🎉 PROJECT VALIDATION PASSED\n");
            output.push_str(&self.green("✅ No corruption or structural issues detected"));
            output.push('\n');
            output.push_str(&self.green("✅ Project is ready for development"));
        } else {
            output.push_str("⚠️  PROJECT VALIDATION FAILED\n");
            output.push_str(&self.red("❌ Issues detected:"));
            output.push('\n');
            for issue in &issues {
                output.push_str(&format!("   {}\n", self.red(&format!("❌ {}", issue))));
            }
            output.push_str("\n💡 Consider comparing with a known good project state");
        }

        if self.verbose {
            let summary = report.summary();
            output.push_str(&self.gray(&format!(
                "\n{} passed, {} failed, {} skipped in {}ms",
                summary.passed, summary.failed, summary.skipped, report.total_duration_ms
            )));
        }

        output
    }

    /// Message printed when the working directory is not the project root
    pub fn not_project_root(&self) -> String {
        format!(
            "{}\n   Please run this tool from the {} project root",
            self.red(&format!("❌ Not in {} project directory", self.project_name)),
            self.project_name
        )
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &ValidationReport) -> String {
        let mut output = self.header();
        output.push('\n');
        for line in report.checks.iter().filter_map(|c| self.check_line(c)) {
            output.push_str(&line);
            output.push('\n');
        }
        output.push_str(&self.summary(report));
        output
    }
}
