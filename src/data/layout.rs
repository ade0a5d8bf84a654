//! Expected project layout
//!
//! The shape a healthy JJYWave checkout is expected to have. Every check is a
//! loop over one of the tables in here.

use crate::DoctorError;
use std::path::{Path, PathBuf};

/// Declarative description of an expected project tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    /// Project name, also the stem of the `.xcodeproj` bundle
    pub project_name: String,
    /// Section header markers that must appear in project.pbxproj
    pub required_sections: Vec<String>,
    /// Extension of counted source files (without the dot)
    pub source_extension: String,
    /// Language name used when reporting source counts
    pub source_language: String,
    /// Path fragments marking a source file as a test file
    pub test_markers: Vec<String>,
    /// Expected number of non-test source files
    pub expected_main_sources: usize,
    /// Expected number of test source files
    pub expected_test_sources: usize,
    /// Directories that must exist, relative to the root
    pub required_directories: Vec<String>,
    /// Resource files that must exist, relative to the root
    pub required_files: Vec<String>,
    /// Sources that get the brace-balance check, relative to the root
    pub critical_files: Vec<String>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ProjectLayout {
    /// The JJYWave project as of its last known good state
    pub fn jjywave() -> Self {
        ProjectLayout {
            project_name: "JJYWave".to_string(),
            required_sections: strings(&[
                "Begin PBXBuildFile section",
                "Begin PBXFileReference section",
                "Begin PBXNativeTarget section",
                "Begin PBXProject section",
            ]),
            source_extension: "swift".to_string(),
            source_language: "Swift".to_string(),
            test_markers: strings(&["/Tests/", "/JJYWaveTests/"]),
            expected_main_sources: 17,
            expected_test_sources: 20,
            required_directories: strings(&[
                "App",
                "JJYKit/Audio",
                "JJYKit/Frames",
                "JJYKit/Generator",
                "JJYKit/Services",
                "JJYKit/Time",
                "Tests",
                "JJYWaveTests",
            ]),
            required_files: strings(&[
                "Base.lproj/Main.storyboard",
                "Localizable.xcstrings",
                "JJYWave.entitlements",
                "README.md",
            ]),
            critical_files: strings(&[
                "JJYKit/Generator/JJYAudioGenerator.swift",
                "App/ViewController.swift",
                "App/AppDelegate.swift",
            ]),
        }
    }

    /// `<name>.xcodeproj`
    pub fn bundle_dir(&self) -> String {
        format!("{}.xcodeproj", self.project_name)
    }

    /// `<name>.xcodeproj/project.pbxproj`, relative to the root
    pub fn manifest_relative(&self) -> String {
        format!("{}/project.pbxproj", self.bundle_dir())
    }

    /// Absolute manifest path under `root`
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(self.bundle_dir()).join("project.pbxproj")
    }

    /// Whether `dir` looks like the project root (the bundle directory exists)
    pub fn is_project_root(&self, dir: &Path) -> bool {
        dir.join(self.bundle_dir()).exists()
    }

    /// Fail with `NotProjectRoot` unless `dir` is the project root
    pub fn ensure_project_root(&self, dir: &Path) -> Result<(), DoctorError> {
        if self.is_project_root(dir) {
            Ok(())
        } else {
            Err(DoctorError::NotProjectRoot {
                project: self.project_name.clone(),
            })
        }
    }

    /// Whether a root-relative, `/`-separated path belongs to a test target.
    ///
    /// The path is prefixed with `/` so top-level directories such as
    /// `Tests/` match the same fragments as nested ones.
    pub fn is_test_path(&self, relative: &str) -> bool {
        let anchored = format!("/{}", relative.trim_start_matches('/'));
        self.test_markers.iter().any(|m| anchored.contains(m.as_str()))
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::jjywave()
    }
}
