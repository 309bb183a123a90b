//! Error types for kitcheck operations.
//!
//! This module defines [`KitcheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Probe outcomes are never errors. A missing tool, an unresolvable
//! package, an unset variable, or an absent settings file all flow through
//! the status classification in [`crate::probe`]. `KitcheckError` is
//! reserved for genuinely unexpected conditions, such as an audit config
//! file that is present but cannot be parsed.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for kitcheck operations.
#[derive(Debug, Error)]
pub enum KitcheckError {
    /// Audit config file requested explicitly but not found.
    #[error("Audit config not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse an audit config file.
    #[error("Failed to parse audit config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for kitcheck operations.
pub type Result<T> = std::result::Result<T, KitcheckError>;
