//! Core library for inkgauge.
//!
//! This crate provides the readability analyzer and the foundational types
//! used by the `inkgauge` CLI, its MCP server, and any downstream consumers.
//!
//! # Modules
//!
//! - [`readability`] - Readability score, complex words, and suggestions
//! - [`markup`] - Best-effort tag stripping
//! - [`text`] - Term and sentence splitting
//! - [`syllables`] - Syllable estimation heuristic
//! - [`config`] - Configuration loading and management
//! - [`input`] - Input size limits
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use inkgauge_core::readability;
//!
//! let report = readability::analyze("<p>The cat sat on the mat.</p>");
//! assert!(report.suggestions.is_empty());
//! assert!(report.readability_score < 2.0);
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod input;
pub mod markup;
pub mod readability;
pub mod syllables;
pub mod text;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, InputError, InputResult};
pub use input::{DEFAULT_MAX_INPUT_BYTES, validate_input_size};
pub use readability::{ReadabilityReport, ScoreBand, Suggestion, analyze};
