//! Kitcheck - Preflight environment audit for security tooling workflows.
//!
//! Kitcheck probes a catalog of CLI binaries, Python libraries, and
//! configuration values and prints a human-readable report. Absence is a
//! normal outcome reported through a three-way status classification,
//! never a failure: the tool is advisory, not enforcing.
//!
//! # Modules
//!
//! - [`audit`] - Audit orchestration and the structured report
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Audit catalogs, defaults, and YAML overrides
//! - [`error`] - Error types and result aliases
//! - [`probe`] - Command, package, and variable resolvers
//! - [`settings`] - Settings file loading and the environment overlay
//! - [`ui`] - Terminal theme and report rendering
//!
//! # Example
//!
//! ```
//! use kitcheck::probe::{ProbeStatus, VariableResolver};
//! use kitcheck::settings::EnvOverlay;
//!
//! let mut overlay = EnvOverlay::empty();
//! overlay.inject("ANTHROPIC_API_KEY", "sk-real123");
//!
//! let placeholders = vec!["your-key-here".to_string()];
//! let resolver = VariableResolver::new(&placeholders);
//! let outcome = resolver.resolve("ANTHROPIC_API_KEY", &overlay);
//! assert_eq!(outcome.status, ProbeStatus::Present);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod probe;
pub mod settings;
pub mod ui;

pub use error::{KitcheckError, Result};
