//! Settings file loading and the environment overlay.
//!
//! The settings file is a `.env`-style key=value file at the project
//! root. Its entries are injected into an [`EnvOverlay`], an explicit
//! snapshot of the process environment, which the variable probes then
//! read. The real process environment is never mutated, keeping the
//! variable checks pure and the injection step testable.

mod env_file;
mod overlay;

pub use env_file::SettingsParser;
pub use overlay::EnvOverlay;

use std::path::{Path, PathBuf};

use crate::probe::ProbeOutcome;

/// Loads the settings file and injects its entries into an overlay.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    path: PathBuf,
}

impl SettingsLoader {
    /// Create a loader for the given settings file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The settings file path this loader reads.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings file, injecting parsed entries into `overlay`.
    ///
    /// Returns the probe outcome for the file itself: Present when found
    /// and read, Missing with a copy hint otherwise. An unreadable file is
    /// treated the same as a missing one; parsing never fails the run.
    pub fn load_into(&self, overlay: &mut EnvOverlay) -> ProbeOutcome {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => {
                let entries = SettingsParser::parse(&content);
                tracing::debug!(
                    path = %self.path.display(),
                    entries = entries.len(),
                    "settings file loaded"
                );
                for (key, value) in entries {
                    overlay.inject(key, value);
                }
                ProbeOutcome::present("Found")
            }
            Err(err) => {
                tracing::debug!(path = %self.path.display(), %err, "settings file unavailable");
                ProbeOutcome::missing("Copy .env.example to .env")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeStatus;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reports_missing_with_copy_hint() {
        let temp = TempDir::new().unwrap();
        let loader = SettingsLoader::new(temp.path().join(".env"));
        let mut overlay = EnvOverlay::empty();

        let outcome = loader.load_into(&mut overlay);

        assert_eq!(outcome.status, ProbeStatus::Missing);
        assert_eq!(outcome.detail, "Copy .env.example to .env");
        assert!(overlay.is_empty());
    }

    #[test]
    fn present_file_reports_found_and_injects() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "ANTHROPIC_API_KEY=sk-real123\n").unwrap();

        let loader = SettingsLoader::new(&path);
        let mut overlay = EnvOverlay::empty();
        let outcome = loader.load_into(&mut overlay);

        assert_eq!(outcome.status, ProbeStatus::Present);
        assert_eq!(outcome.detail, "Found");
        assert_eq!(overlay.get("ANTHROPIC_API_KEY"), Some("sk-real123"));
    }

    #[test]
    fn injection_overwrites_existing_overlay_entry() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "OPENAI_API_KEY=from-file\n").unwrap();

        let mut overlay = EnvOverlay::empty();
        overlay.inject("OPENAI_API_KEY", "from-process");
        overlay.inject("UNRELATED", "kept");

        SettingsLoader::new(&path).load_into(&mut overlay);

        assert_eq!(overlay.get("OPENAI_API_KEY"), Some("from-file"));
        assert_eq!(overlay.get("UNRELATED"), Some("kept"));
    }

    #[test]
    fn malformed_lines_are_skipped_not_fatal() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".env");
        fs::write(&path, "garbage line\n# COMMENT=ignored\nKEY=value\n").unwrap();

        let mut overlay = EnvOverlay::empty();
        let outcome = SettingsLoader::new(&path).load_into(&mut overlay);

        assert_eq!(outcome.status, ProbeStatus::Present);
        assert_eq!(overlay.get("KEY"), Some("value"));
        assert_eq!(overlay.get("# COMMENT"), None);
    }
}
