//! Report rendering.
//!
//! Pure formatting over the structured audit report: one line per probe
//! with a bracketed colorized status tag, a fixed-width name column, and
//! the detail message, followed by the summary block.

use console::Style;

use crate::audit::AuditReport;
use crate::probe::{ProbeOutcome, ProbeStatus};

use super::theme::Theme;

/// Width of the probe name column.
const NAME_WIDTH: usize = 25;

/// Width of the horizontal rules around the banner and summary.
const RULE_WIDTH: usize = 50;

/// Renders an audit report to stdout.
pub struct ReportPrinter {
    theme: Theme,
    quiet: bool,
}

impl ReportPrinter {
    /// Create a printer with the given theme.
    ///
    /// In quiet mode only the banner and the summary are printed.
    pub fn new(theme: Theme, quiet: bool) -> Self {
        Self { theme, quiet }
    }

    /// Render the full report: banner, sections in audit order, summary.
    pub fn render(&self, report: &AuditReport) {
        println!("\n{}", self.theme.section.apply_to("Kitcheck Environment Audit"));
        println!("{}", "=".repeat(RULE_WIDTH));

        if !self.quiet {
            self.print_section("Checking System Tools", report.system_tools.entries());
            self.print_section("Checking Python Libraries", report.python_packages.entries());
            self.print_section("Checking Security Tools", report.security_tools.entries());

            println!(
                "\n{}",
                self.theme
                    .section
                    .apply_to(format!("[+] Checking Configuration ({})", report.settings.0))
            );
            let settings_label = format!("{} file", report.settings.0);
            println!("{}", self.probe_line(&settings_label, &report.settings.1));
            for (name, outcome) in report.api_keys.entries() {
                println!("{}", self.probe_line(name, outcome));
            }
        }

        for line in self.summary_lines(report) {
            println!("{}", line);
        }
    }

    /// Format one probe line: bracketed status tag, padded name, detail.
    pub fn probe_line(&self, name: &str, outcome: &ProbeOutcome) -> String {
        let tag = self
            .status_style(outcome.status)
            .apply_to(outcome.status.tag());
        format!(
            "[{}] {:<width$} {}",
            tag,
            name,
            outcome.detail,
            width = NAME_WIDTH
        )
    }

    /// Format the summary block, rules included.
    pub fn summary_lines(&self, report: &AuditReport) -> Vec<String> {
        let mut lines = vec![format!("\n{}", "=".repeat(RULE_WIDTH))];

        let missing = report.missing_security_tools();
        if missing.is_empty() {
            lines.push(
                self.theme
                    .ok
                    .apply_to("All checked tools are installed!")
                    .to_string(),
            );
        } else {
            lines.push(
                self.theme
                    .warning
                    .apply_to(format!(
                        "Warning: {} tools are missing or not in PATH.",
                        missing.len()
                    ))
                    .to_string(),
            );
            lines.push("Run usage tests to see if these are critical for your workflow.".into());
            lines.push("To install missing tools, run: ./install_tools.sh".into());
            if report.security_warning_count() > 0 {
                lines.push(
                    "If tools show as WARNING (Found at...), run: source ~/.bashrc".into(),
                );
            }
        }

        lines.push(format!("{}\n", "=".repeat(RULE_WIDTH)));
        lines
    }

    fn print_section(&self, title: &str, entries: &[(String, ProbeOutcome)]) {
        println!("\n{}", self.theme.section.apply_to(format!("[+] {}", title)));
        for (name, outcome) in entries {
            println!("{}", self.probe_line(name, outcome));
        }
    }

    fn status_style(&self, status: ProbeStatus) -> &Style {
        match status {
            ProbeStatus::Present => &self.theme.ok,
            ProbeStatus::Missing => &self.theme.missing,
            ProbeStatus::Warning => &self.theme.warning,
        }
    }
}
