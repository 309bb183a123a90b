//! Audit configuration: catalogs, defaults, and YAML overrides.
//!
//! The catalogs the auditor probes (tool names, package identifiers,
//! variable names) and the placeholder denylist are configuration data,
//! not logic. Built-in defaults cover the standard security-tooling
//! workflow; an optional `kitcheck.yml` at the project root can replace
//! any catalog wholesale.

mod defaults;
mod loader;
mod schema;

pub use loader::{discover, load};
pub use schema::{AuditConfig, PackageSpec};

/// Default audit config file name, looked up at the project root.
pub const CONFIG_FILE_NAME: &str = "kitcheck.yml";
