//! Utility modules for the refdeck application.
//!
//! This module contains common utility functions and helpers that are used
//! throughout the application.
//!
//! # Available Utilities
//!
//! - [`color`] - Parsing of named and hex colors from the configuration file
//!
//! All utilities are pure functions with explicit error types, so they are
//! easy to unit test and safe to call from rendering code.

pub mod color;
