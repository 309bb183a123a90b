//! Configuration schema definitions for kitcheck.
//!
//! These structs map to the optional `kitcheck.yml` override file. Every
//! field defaults to the built-in catalog, so an override file only needs
//! to name the catalogs it changes; a present field replaces the default
//! list wholesale.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults;

/// Root audit configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Generic system commands to probe.
    pub system_tools: Vec<String>,

    /// Python libraries to probe (declared pip name, optionally with a
    /// differing importable module name).
    pub python_packages: Vec<PackageSpec>,

    /// Security tool binaries to probe. Missing entries feed the summary.
    pub security_tools: Vec<String>,

    /// Environment variables holding provider credentials.
    pub api_key_vars: Vec<String>,

    /// Sentinel values indicating a credential was left at its example
    /// default.
    pub placeholder_values: Vec<String>,

    /// Settings file path, relative to the project root.
    pub settings_file: PathBuf,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            system_tools: defaults::system_tools(),
            python_packages: defaults::python_packages(),
            security_tools: defaults::security_tools(),
            api_key_vars: defaults::api_key_vars(),
            placeholder_values: defaults::placeholder_values(),
            settings_file: PathBuf::from(defaults::SETTINGS_FILE),
        }
    }
}

/// A Python package catalog entry.
///
/// Most packages import under their pip name; the mapped form covers the
/// ones that do not (`dnspython` imports as `dns`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PackageSpec {
    /// Declared name doubles as the module name.
    Bare(String),
    /// Declared name with an explicit importable module name.
    Mapped { name: String, module: String },
}

impl PackageSpec {
    /// Create a bare entry.
    pub fn bare(name: impl Into<String>) -> Self {
        Self::Bare(name.into())
    }

    /// Create a mapped entry.
    pub fn mapped(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self::Mapped {
            name: name.into(),
            module: module.into(),
        }
    }

    /// The declared (pip-installable) package name.
    pub fn name(&self) -> &str {
        match self {
            Self::Bare(name) => name,
            Self::Mapped { name, .. } => name,
        }
    }

    /// The importable module name: the mapping when present, otherwise
    /// the declared name unchanged.
    pub fn module_name(&self) -> &str {
        match self {
            Self::Bare(name) => name,
            Self::Mapped { module, .. } => module,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_builtin_catalogs() {
        let config = AuditConfig::default();

        assert!(config.system_tools.contains(&"git".to_string()));
        assert!(config.security_tools.contains(&"nuclei".to_string()));
        assert!(config.api_key_vars.contains(&"ANTHROPIC_API_KEY".to_string()));
        assert!(config
            .placeholder_values
            .contains(&"your-key-here".to_string()));
        assert_eq!(config.settings_file, PathBuf::from(".env"));
    }

    #[test]
    fn bare_spec_uses_name_as_module() {
        let spec = PackageSpec::bare("requests");
        assert_eq!(spec.name(), "requests");
        assert_eq!(spec.module_name(), "requests");
    }

    #[test]
    fn mapped_spec_separates_name_and_module() {
        let spec = PackageSpec::mapped("dnspython", "dns");
        assert_eq!(spec.name(), "dnspython");
        assert_eq!(spec.module_name(), "dns");
    }

    #[test]
    fn package_spec_deserializes_both_forms() {
        let yaml = r#"
- requests
- name: dnspython
  module: dns
"#;
        let specs: Vec<PackageSpec> = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(specs[0], PackageSpec::bare("requests"));
        assert_eq!(specs[1], PackageSpec::mapped("dnspython", "dns"));
    }

    #[test]
    fn partial_yaml_keeps_defaults_for_absent_fields() {
        let yaml = "security_tools: [nmap]\n";
        let config: AuditConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.security_tools, vec!["nmap".to_string()]);
        // Untouched fields fall back to the built-in catalogs.
        assert!(config.system_tools.contains(&"git".to_string()));
        assert_eq!(config.settings_file, PathBuf::from(".env"));
    }

    #[test]
    fn present_field_replaces_default_wholesale() {
        let yaml = "system_tools: [git]\n";
        let config: AuditConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.system_tools, vec!["git".to_string()]);
    }
}
