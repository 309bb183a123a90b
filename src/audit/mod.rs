//! Audit orchestration and the structured report.
//!
//! The auditor walks the catalogs in a fixed order (system tools, Python
//! libraries, security tools, settings file, API key variables) and
//! collects every probe outcome into an [`AuditReport`]. Rendering and
//! summary logic operate on the report, so the whole run is inspectable
//! without capturing terminal output.
//!
//! The one ordering dependency: the settings file is loaded into the
//! environment overlay before the variable probes read it.

use std::path::{Path, PathBuf};

use crate::config::AuditConfig;
use crate::probe::{CommandResolver, PackageResolver, ProbeOutcome, VariableResolver};
use crate::settings::{EnvOverlay, SettingsLoader};

/// Ordered probe outcomes for one audit section.
#[derive(Debug, Clone, Default)]
pub struct SectionReport {
    entries: Vec<(String, ProbeOutcome)>,
}

impl SectionReport {
    /// Append one probe outcome.
    pub fn push(&mut self, name: impl Into<String>, outcome: ProbeOutcome) {
        self.entries.push((name.into(), outcome));
    }

    /// The outcomes in probe order.
    pub fn entries(&self) -> &[(String, ProbeOutcome)] {
        &self.entries
    }

    /// Names of entries that came back Missing, in probe order.
    pub fn missing_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, outcome)| outcome.is_missing())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Count of entries that came back Warning.
    pub fn warning_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, outcome)| outcome.is_warning())
            .count()
    }
}

/// Structured result of a full audit run.
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Generic system command probes.
    pub system_tools: SectionReport,
    /// Python library probes.
    pub python_packages: SectionReport,
    /// Security tool probes; Missing entries drive the summary.
    pub security_tools: SectionReport,
    /// The settings-file probe (file name and outcome).
    pub settings: (String, ProbeOutcome),
    /// API key variable probes.
    pub api_keys: SectionReport,
}

impl AuditReport {
    /// Security tools that came back Missing, in probe order.
    pub fn missing_security_tools(&self) -> Vec<&str> {
        self.security_tools.missing_names()
    }

    /// Count of security tools that came back Warning (found off PATH).
    pub fn security_warning_count(&self) -> usize {
        self.security_tools.warning_count()
    }

    /// Whether every security tool probe came back Present or Warning.
    pub fn all_security_tools_found(&self) -> bool {
        self.missing_security_tools().is_empty()
    }
}

/// Runs the audit over a config's catalogs.
pub struct Auditor {
    config: AuditConfig,
    commands: CommandResolver,
    packages: PackageResolver,
}

impl Auditor {
    /// Create an auditor probing the real environment.
    pub fn new(config: AuditConfig) -> Self {
        Self {
            config,
            commands: CommandResolver::from_environment(),
            packages: PackageResolver::new(),
        }
    }

    /// Create an auditor with explicit resolvers (for tests).
    pub fn with_resolvers(
        config: AuditConfig,
        commands: CommandResolver,
        packages: PackageResolver,
    ) -> Self {
        Self {
            config,
            commands,
            packages,
        }
    }

    /// The config this auditor probes.
    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Run the full audit for a project root.
    pub fn run(&self, project_root: &Path) -> AuditReport {
        let system_tools = self.probe_commands(&self.config.system_tools);

        let mut python_packages = SectionReport::default();
        for spec in &self.config.python_packages {
            python_packages.push(spec.name(), self.packages.resolve(spec));
        }

        let security_tools = self.probe_commands(&self.config.security_tools);

        let settings_path = self.settings_path(project_root);
        let mut overlay = EnvOverlay::from_process();
        let settings_outcome = SettingsLoader::new(&settings_path).load_into(&mut overlay);
        let settings_label = self.config.settings_file.display().to_string();

        let mut api_keys = SectionReport::default();
        let variables = VariableResolver::new(&self.config.placeholder_values);
        for name in &self.config.api_key_vars {
            api_keys.push(name.clone(), variables.resolve(name, &overlay));
        }

        AuditReport {
            system_tools,
            python_packages,
            security_tools,
            settings: (settings_label, settings_outcome),
            api_keys,
        }
    }

    fn probe_commands(&self, catalog: &[String]) -> SectionReport {
        let mut section = SectionReport::default();
        for tool in catalog {
            section.push(tool.clone(), self.commands.resolve(tool));
        }
        section
    }

    fn settings_path(&self, project_root: &Path) -> PathBuf {
        if self.config.settings_file.is_absolute() {
            self.config.settings_file.clone()
        } else {
            project_root.join(&self.config.settings_file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PackageSpec;
    use crate::probe::{ProbeOutcome, ProbeStatus};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    fn test_config() -> AuditConfig {
        AuditConfig {
            system_tools: vec!["git".into()],
            python_packages: vec![PackageSpec::bare("requests")],
            security_tools: vec!["nmap".into(), "nuclei".into()],
            api_key_vars: vec!["ANTHROPIC_API_KEY".into()],
            placeholder_values: vec!["your-key-here".into()],
            settings_file: ".env".into(),
        }
    }

    fn test_auditor(config: AuditConfig, bin: &Path, fallback: &Path) -> Auditor {
        Auditor::with_resolvers(
            config,
            CommandResolver::new(vec![bin.to_path_buf()], vec![fallback.to_path_buf()]),
            PackageResolver::with_interpreter("/nonexistent/python3"),
        )
    }

    #[test]
    fn run_walks_all_sections_in_catalog_order() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        let fallback = temp.path().join("fallback");
        create_fake_binary(&bin.join("git"));
        create_fake_binary(&bin.join("nmap"));
        create_fake_binary(&fallback.join("nuclei"));

        let auditor = test_auditor(test_config(), &bin, &fallback);
        let report = auditor.run(temp.path());

        assert_eq!(report.system_tools.entries().len(), 1);
        assert_eq!(report.python_packages.entries().len(), 1);
        assert_eq!(report.security_tools.entries().len(), 2);
        assert_eq!(report.api_keys.entries().len(), 1);

        let (name, outcome) = &report.security_tools.entries()[0];
        assert_eq!(name, "nmap");
        assert!(outcome.is_present());

        let (name, outcome) = &report.security_tools.entries()[1];
        assert_eq!(name, "nuclei");
        assert!(outcome.is_warning());
    }

    #[test]
    fn settings_file_feeds_variable_probes() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        fs::write(temp.path().join(".env"), "ANTHROPIC_API_KEY=sk-real123\n").unwrap();

        let auditor = test_auditor(test_config(), &bin, &bin);
        let report = auditor.run(temp.path());

        assert!(report.settings.1.is_present());
        let (name, outcome) = &report.api_keys.entries()[0];
        assert_eq!(name, "ANTHROPIC_API_KEY");
        assert_eq!(outcome.status, ProbeStatus::Present);
        assert_eq!(outcome.detail, "Configured");
    }

    #[test]
    fn absent_settings_file_reports_missing_and_vars_fall_back() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        fs::create_dir_all(&bin).unwrap();

        let mut config = test_config();
        // A variable name nothing in the process environment would set.
        config.api_key_vars = vec!["KITCHECK_TEST_UNSET_VAR".into()];

        let auditor = test_auditor(config, &bin, &bin);
        let report = auditor.run(temp.path());

        assert!(report.settings.1.is_missing());
        assert_eq!(report.settings.0, ".env");
        let (_, outcome) = &report.api_keys.entries()[0];
        assert_eq!(outcome.status, ProbeStatus::Warning);
    }

    #[test]
    fn missing_security_tools_are_counted_for_the_summary() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        let fallback = temp.path().join("fallback");
        create_fake_binary(&bin.join("nmap"));
        create_fake_binary(&fallback.join("nuclei"));

        let mut config = test_config();
        config.security_tools = vec!["nmap".into(), "nuclei".into(), "ghost-tool".into()];

        let auditor = test_auditor(config, &bin, &fallback);
        let report = auditor.run(temp.path());

        assert_eq!(report.missing_security_tools(), vec!["ghost-tool"]);
        assert_eq!(report.security_warning_count(), 1);
        assert!(!report.all_security_tools_found());
    }

    #[test]
    fn all_found_when_nothing_missing() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("nmap"));
        create_fake_binary(&bin.join("nuclei"));

        let auditor = test_auditor(test_config(), &bin, &bin);
        let report = auditor.run(temp.path());

        assert!(report.all_security_tools_found());
        assert_eq!(report.security_warning_count(), 0);
    }

    #[test]
    fn section_report_missing_names_preserve_order() {
        let mut section = SectionReport::default();
        section.push("b-tool", ProbeOutcome::missing(""));
        section.push("a-tool", ProbeOutcome::missing(""));
        section.push("ok-tool", ProbeOutcome::present(""));

        assert_eq!(section.missing_names(), vec!["b-tool", "a-tool"]);
    }
}
