//! Audit config discovery and loading.
//!
//! Config resolution order:
//! 1. An explicit `--config` path (must exist and parse)
//! 2. `kitcheck.yml` at the project root (must parse when present)
//! 3. Built-in defaults
//!
//! A malformed file that the user pointed at (or placed at the well-known
//! location) is a real error, not a probe outcome: the audit has no
//! sensible way to run with half a catalog.

use std::path::{Path, PathBuf};

use crate::error::{KitcheckError, Result};

use super::schema::AuditConfig;
use super::CONFIG_FILE_NAME;

/// Find the config file for a project root, if any.
pub fn discover(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

/// Load the audit config for a project.
///
/// `explicit` is the `--config` override; when given, the file must exist.
pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<AuditConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(KitcheckError::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            path.to_path_buf()
        }
        None => match discover(project_root) {
            Some(path) => path,
            None => {
                tracing::debug!("no audit config file, using built-in catalogs");
                return Ok(AuditConfig::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path)?;
    let config: AuditConfig =
        serde_yaml::from_str(&content).map_err(|err| KitcheckError::ConfigParseError {
            path: path.clone(),
            message: err.to_string(),
        })?;

    tracing::debug!(path = %path.display(), "audit config loaded");
    Ok(config)
}
