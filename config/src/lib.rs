//! # Configuration System
//!
//! Process-wide configuration store for the cognitive server.
//!
//! This crate provides:
//! - A flat table of named string parameters, seeded from built-in defaults
//! - Bulk overrides loaded from a `key = value` configuration file
//! - Typed accessors (string, integer, floating-point, boolean)
//! - A lazily constructed process-wide instance behind [`config()`]
//!
//! # Best Practices
//!
//! - Uses `thiserror` for structured error definitions
//! - Logs applied file overrides through `tracing`
//! - Prefer passing a [`Config`] reference explicitly through initialization
//!   paths; reserve the process-wide accessor for legacy-compatible call sites

pub mod config;
pub mod file_loader;

pub use config::{Config, ConfigValueError, DEFAULT_CONFIG, config};
pub use file_loader::{ConfigLoadError, read_config_file};
