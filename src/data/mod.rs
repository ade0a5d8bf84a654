//! Data module for xcproj-doctor
//!
//! Contains the expected layout of a healthy project.

pub mod layout;
