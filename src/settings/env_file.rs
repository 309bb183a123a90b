//! .env file parsing.
//!
//! This module parses settings files in the standard KEY=value format.
//! Parsing is infallible by design: lines that do not parse are simply
//! not entries.

use std::collections::HashMap;

/// Parses `.env`-style settings content into a map of variables.
///
/// # Supported Format
///
/// - Simple: `KEY=value`
/// - Comments: `# This is a comment` (skipped even when they contain `=`)
/// - Whitespace around equals: `KEY = value`
/// - Values with equals signs: `URL=https://example.com?foo=bar`
///   (split on the first `=` only)
///
/// Lines with no `=` are skipped. Values are injected verbatim after
/// whitespace trimming; quotes are not stripped.
///
/// # Example
///
/// ```
/// use kitcheck::settings::SettingsParser;
///
/// let content = r#"
/// # API credentials
/// ANTHROPIC_API_KEY=sk-real123
/// ENDPOINT=https://api.example.com?team=red
/// "#;
///
/// let vars = SettingsParser::parse(content);
/// assert_eq!(vars.get("ANTHROPIC_API_KEY"), Some(&"sk-real123".to_string()));
/// assert_eq!(vars.get("ENDPOINT"), Some(&"https://api.example.com?team=red".to_string()));
/// ```
pub struct SettingsParser;

impl SettingsParser {
    /// Parse settings content into a map of variables.
    pub fn parse(content: &str) -> HashMap<String, String> {
        let mut vars = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = Self::parse_line(line) {
                vars.insert(key, value);
            }
        }

        vars
    }

    /// Parse a single line; `None` when the line has no `=`.
    fn parse_line(line: &str) -> Option<(String, String)> {
        let eq_pos = line.find('=')?;
        let key = line[..eq_pos].trim().to_string();
        let value = line[eq_pos + 1..].trim().to_string();
        Some((key, value))
    }
}
