//! Package resolver: dry availability lookups for Python libraries.
//!
//! The audited workflow is a Python tool suite, so library checks go
//! through the Python interpreter's own module finder. The lookup uses
//! `importlib.util.find_spec`, which locates a module without importing
//! or executing it. Any failure (interpreter missing, nonzero exit,
//! malformed module name) collapses to Missing with an install hint;
//! nothing here ever propagates an error to the caller.

use std::path::PathBuf;
use std::process::Command;

use crate::config::PackageSpec;

use super::ProbeOutcome;

/// Resolves Python package availability via the interpreter's module finder.
#[derive(Debug, Clone)]
pub struct PackageResolver {
    interpreter: PathBuf,
}

impl Default for PackageResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PackageResolver {
    /// Create a resolver using the default `python3` interpreter.
    pub fn new() -> Self {
        Self {
            interpreter: PathBuf::from("python3"),
        }
    }

    /// Create a resolver using a specific interpreter binary.
    ///
    /// Tests point this at a nonexistent path to exercise the failure path.
    pub fn with_interpreter(interpreter: impl Into<PathBuf>) -> Self {
        Self {
            interpreter: interpreter.into(),
        }
    }

    /// Resolve a package spec to a probe outcome.
    ///
    /// The spec's module name (declared name unless mapped) is handed to
    /// `find_spec`; a zero exit means the module is resolvable.
    pub fn resolve(&self, spec: &PackageSpec) -> ProbeOutcome {
        let module = spec.module_name();
        let script = format!(
            "import importlib.util, sys\nsys.exit(0 if importlib.util.find_spec({module:?}) is not None else 1)"
        );

        let resolvable = Command::new(&self.interpreter)
            .args(["-c", &script])
            .output()
            .map(|output| output.status.success())
            .unwrap_or(false);

        if resolvable {
            tracing::debug!(package = spec.name(), module, "module resolvable");
            ProbeOutcome::present("")
        } else {
            ProbeOutcome::missing(format!("Run: pip install {}", spec.name()))
        }
    }
}
