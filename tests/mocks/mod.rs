//! Fixture projects for testing without a real Xcode checkout.
//!
//! This module lays out throwaway project trees that can be bent into the
//! broken shapes the validator is meant to catch.


pub use project::*;
