//! Explicit environment overlay.
//!
//! A snapshot of the process environment that settings-file entries are
//! injected into. Variable probes read the overlay instead of `std::env`,
//! so the injection step is visible in the data flow rather than hidden
//! in global state.

use std::collections::HashMap;

/// A mutable snapshot of environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvOverlay {
    vars: HashMap<String, String>,
}

impl EnvOverlay {
    /// Create an empty overlay.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables with non-UTF-8 names or values are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Read a variable's value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Inject a variable, overwriting any existing value for that key.
    pub fn inject(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Number of variables in the overlay.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the overlay holds no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
