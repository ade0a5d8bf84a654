//! CLI module for argument parsing and terminal output.

pub mod args;
pub mod output;
