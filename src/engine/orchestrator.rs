//! Check execution orchestrator.
//!
//! Runs the checks in their fixed order against one project root.
//!
//! # Short-circuits
//!
//! - Manifest missing (MAN-001 fails): every later check is skipped
//! - Manifest unreadable (MAN-002 fails): every later check is skipped
//!
//! Every other check runs regardless of earlier failures. Skipped checks are
//! still recorded, as `CheckResult::Skip`, so the report always lists the
//! full catalogue.

use crate::checks::{get_all_checks, manifest, sources, structure, syntax};
use crate::data::layout::ProjectLayout;
use crate::engine::result::{ResultAggregator, ValidationReport};
use crate::{Check, CheckResult};
use std::collections::VecDeque;
use std::path::Path;
use std::time::Instant;

/// Sequential validator for one project layout
#[derive(Debug, Clone, Default)]
pub struct ProjectValidator {
    layout: ProjectLayout,
}

/// In-flight state of one run
struct Run<'a, F: FnMut(&Check)> {
    pending: VecDeque<Check>,
    aggregator: ResultAggregator,
    on_check: &'a mut F,
}

impl<F: FnMut(&Check)> Run<'_, F> {
    /// Attach `result` to the next check in catalogue order
    fn record(&mut self, result: CheckResult) {
        if let Some(check) = self.pending.pop_front() {
            let check = check.with_result(result);
            tracing::debug!(id = %check.id, result = ?check.result, "check finished");
            (self.on_check)(&check);
            self.aggregator.add_result(check);
        }
    }

    /// Mark every remaining check as skipped
    fn skip_rest(&mut self, reason: &str) {
        while !self.pending.is_empty() {
            self.record(CheckResult::Skip {
                reason: reason.to_string(),
            });
        }
    }
}

impl ProjectValidator {
    pub fn new(layout: ProjectLayout) -> Self {
        ProjectValidator { layout }
    }

    /// Run every check and return the report
    pub fn run(&self, root: &Path) -> ValidationReport {
        self.run_with(root, |_| {})
    }

    /// Run every check, calling `on_check` as each one completes
    pub fn run_with<F: FnMut(&Check)>(&self, root: &Path, mut on_check: F) -> ValidationReport {
        let start = Instant::now();
        let layout = &self.layout;
        let mut run = Run {
            pending: get_all_checks().into(),
            aggregator: ResultAggregator::new(root),
            on_check: &mut on_check,
        };

        tracing::debug!(root = %root.display(), project = %layout.project_name, "validation started");

        let exists = manifest::check_manifest_exists(root, layout);
        let missing = exists.is_fail();
        run.record(exists);
        if missing {
            run.skip_rest("project.pbxproj missing");
            return run.aggregator.into_report(start.elapsed().as_millis() as u64);
        }

        let (readable, content) = manifest::check_manifest_readable(root, layout);
        run.record(readable);
        let Some(content) = content else {
            run.skip_rest("project.pbxproj unreadable");
            return run.aggregator.into_report(start.elapsed().as_millis() as u64);
        };

        run.record(manifest::check_sections(&content, layout));

        let (main, test) = sources::check_source_counts(root, layout);
        run.record(main);
        run.record(test);

        run.record(structure::check_directories(root, layout));
        run.record(structure::check_resource_files(root, layout));
        run.record(syntax::check_critical_files(root, layout));

        run.aggregator.into_report(start.elapsed().as_millis() as u64)
    }
}
