//! Variable resolver: classify optional API key variables.
//!
//! Unlike the command and package resolvers, absence here is never a hard
//! Missing: the keys are optional feature flags, not requirements. An
//! unset or blank variable warns, a value matching the placeholder
//! denylist warns, anything else is configured.

use crate::settings::EnvOverlay;

use super::ProbeOutcome;

/// Resolves environment variables against an overlay.
#[derive(Debug, Clone)]
pub struct VariableResolver<'a> {
    placeholders: &'a [String],
}

impl<'a> VariableResolver<'a> {
    /// Create a resolver with the given placeholder denylist.
    pub fn new(placeholders: &'a [String]) -> Self {
        Self { placeholders }
    }

    /// Classify one variable.
    ///
    /// Placeholder detection is an exact string match against the raw
    /// value, never a substring or case-folded comparison.
    pub fn resolve(&self, name: &str, env: &EnvOverlay) -> ProbeOutcome {
        match env.get(name) {
            Some(value) if !value.trim().is_empty() => {
                if self.placeholders.iter().any(|p| p == value) {
                    ProbeOutcome::warning("Set to placeholder value")
                } else {
                    ProbeOutcome::present("Configured")
                }
            }
            _ => ProbeOutcome::warning("Not set (some features may fail)"),
        }
    }
}
