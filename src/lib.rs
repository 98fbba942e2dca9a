//! Refdeck - a terminal quick-reference browser
//!
//! This library renders a catalog of reference entries as sections of
//! clickable tiles, with a single detail modal on top. The catalog is a
//! JSON document loaded once at startup; a bundled demo catalog is used
//! when none is configured.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`catalog`] - Catalog loading and the entry data model
//! * [`config`] - Application configuration management
//! * [`logging`] - Optional file logging setup
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility functions and helpers

/// Catalog of reference entries and its JSON loader
pub mod catalog;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon themes and glyph resolution for the TUI
pub mod icons;

/// File logging setup
pub mod logging;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for color parsing and other helpers
pub mod utils;

// Re-export the core data types for convenient access
pub use catalog::{Catalog, Category, Entry};
