//! Visual theme and styling.

use console::Style;

/// Kitcheck's visual theme.
///
/// One style per probe status, plus slots for section headers and
/// secondary text.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for Present status tags (green).
    pub ok: Style,
    /// Style for Missing status tags (red).
    pub missing: Style,
    /// Style for Warning status tags (yellow).
    pub warning: Style,
    /// Style for section headers and the banner (cyan).
    pub section: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the default colored theme.
    pub fn new() -> Self {
        Self {
            ok: Style::new().green(),
            missing: Style::new().red(),
            warning: Style::new().yellow(),
            section: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            ok: Style::new(),
            missing: Style::new(),
            warning: Style::new(),
            section: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
