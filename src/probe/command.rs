//! Command resolver: locate executables on PATH and in fallback bin dirs.
//!
//! The common source of confusing audit results is a tool that is
//! installed but not on PATH in the current shell. Go and Rust tooling
//! installs into per-user bin directories that a fresh shell profile may
//! not export yet. The resolver therefore searches PATH first, then a
//! fixed list of well-known user-local bin directories, and classifies an
//! off-PATH hit as a warning rather than a hard miss.
//!
//! Resolution walks PATH entries directly rather than shelling out to
//! `which`: `which` behavior varies across systems and is sometimes a
//! shell builtin with inconsistent error handling.

use std::path::{Path, PathBuf};

use super::ProbeOutcome;

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Well-known user-local bin directories probed when PATH comes up empty.
///
/// Covers the Go workspace, the Cargo home, the XDG user bin dir, a plain
/// home bin, and the system-wide Go toolchain install.
pub fn fallback_bin_dirs(home: &Path) -> Vec<PathBuf> {
    vec![
        home.join("go").join("bin"),
        home.join(".cargo").join("bin"),
        home.join(".local").join("bin"),
        home.join("bin"),
        PathBuf::from("/usr/local/go/bin"),
    ]
}

/// Resolves command names against PATH and the fallback bin directories.
///
/// Holds the directory lists it searches, so tests can construct a
/// resolver over temp directories without touching the real environment.
#[derive(Debug, Clone)]
pub struct CommandResolver {
    path_entries: Vec<PathBuf>,
    fallback_dirs: Vec<PathBuf>,
}

impl CommandResolver {
    /// Create a resolver over explicit directory lists.
    pub fn new(path_entries: Vec<PathBuf>, fallback_dirs: Vec<PathBuf>) -> Self {
        Self {
            path_entries,
            fallback_dirs,
        }
    }

    /// Create a resolver from the actual process environment.
    pub fn from_environment() -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("/"));
        Self {
            path_entries: parse_system_path(),
            fallback_dirs: fallback_bin_dirs(&home),
        }
    }

    /// Resolve a command name to a probe outcome.
    ///
    /// Present with the resolved path when found on PATH; Warning with the
    /// location when found executable in a fallback dir; Missing otherwise.
    pub fn resolve(&self, tool: &str) -> ProbeOutcome {
        if let Some(path) = self.resolve_on_path(tool) {
            tracing::debug!(tool, path = %path.display(), "resolved on PATH");
            return ProbeOutcome::present(path.display().to_string());
        }

        for dir in &self.fallback_dirs {
            let candidate = dir.join(tool);
            if candidate.is_file() && is_executable(&candidate) {
                tracing::debug!(tool, path = %candidate.display(), "found off PATH");
                return ProbeOutcome::warning(format!(
                    "Found at {} (not on PATH)",
                    candidate.display()
                ));
            }
        }

        ProbeOutcome::missing("Not found on PATH")
    }

    /// Resolve a tool's binary path by iterating over PATH entries.
    ///
    /// Returns the first match that exists and is executable.
    fn resolve_on_path(&self, tool: &str) -> Option<PathBuf> {
        for dir in &self.path_entries {
            let candidate = dir.join(tool);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
        None
    }
}
