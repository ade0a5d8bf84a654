//! Validation check modules.
//!
//! This module contains all validation checks organized by category:
//! - Manifest: project.pbxproj presence, readability and sections
//! - Sources: main and test source file counts
//! - Structure: required directories and resource files
//! - Syntax: brace balance of critical source files
//!
//! Checks never panic and never propagate errors. Filesystem failures become
//! `CheckResult::Fail` entries whose message is the issue text shown to the
//! user.

pub mod manifest;
pub mod sources;
pub mod structure;
pub mod syntax;

use crate::Check;

/// Get all registered checks, in execution order
pub fn get_all_checks() -> Vec<Check> {
    let mut checks = Vec::new();
    checks.extend(manifest::get_manifest_checks());
    checks.extend(sources::get_source_checks());
    checks.extend(structure::get_structure_checks());
    checks.extend(syntax::get_syntax_checks());
    checks
}
