//! # form-forge-cli
//!
//! CLI library for editing form documents and generating React/Zod form
//! code from them.
//!
//! This crate provides the host layer for the `form-forge` tool: it keeps
//! form definitions in JSON documents on disk, applies editing operations
//! to them, and writes the generated artifacts.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`document`] - Form document load/edit/save
//! - [`generator`] - Artifact generation and staleness checks
//! - [`writer`] - File output and dry-run support
//! - [`watcher`] - Document watching for development mode
//! - [`error`] - Error types and handling

pub mod config;
pub mod document;
pub mod error;
pub mod generator;
pub mod watcher;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use document::DocumentStore;
pub use error::{CliError, CliResult};
pub use generator::FormGenerator;
pub use watcher::FileWatcher;
pub use writer::FileWriter;
