//! Argument parser for xcproj-doctor.
//!
//! The tool is normally run with no arguments. The handful of flags below
//! only change presentation, never what is checked.

use crate::DoctorError;
use std::env;

/// Command to execute
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Command {
    /// Validate the project in the working directory (default)
    #[default]
    Check,
    /// Print version information
    Version,
    /// List all checks
    List,
}

/// Parsed command line arguments
#[derive(Debug, Clone, Default)]
pub struct Args {
    /// Command to execute
    pub command: Command,
    /// Show check IDs, timings and skipped checks; enable debug logging
    pub verbose: bool,
    /// Disable colored output
    pub no_color: bool,
    /// Show help
    pub help: bool,
}

impl Args {
    /// Parse command line arguments from std::env::args()
    pub fn parse() -> Result<Self, DoctorError> {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::parse_from(&args)
    }

    /// Parse command line arguments from a slice (for testing)
    pub fn parse_from(args: &[String]) -> Result<Self, DoctorError> {
        let mut result = Args::default();

        if env::var_os("NO_COLOR").is_some() {
            result.no_color = true;
        }

        for arg in args {
            match arg.as_str() {
                "check" => result.command = Command::Check,
                "version" => result.command = Command::Version,
                "list" => result.command = Command::List,

                "-h" | "--help" => result.help = true,
                "-V" | "--version" => result.command = Command::Version,

                "-v" | "--verbose" => result.verbose = true,
                "--no-color" => result.no_color = true,

                _ if arg.starts_with('-') => {
                    return Err(DoctorError::InvalidArgument(format!("Unknown option: '{}'", arg)));
                }
                _ => {
                    return Err(DoctorError::InvalidArgument(format!(
                        "Unexpected argument: '{}'",
                        arg
                    )));
                }
            }
        }

        Ok(result)
    }
}
