//! Terminal theme and report rendering.
//!
//! The audit output is purely presentational: a theme of `console` styles
//! and a printer that walks the structured [`crate::audit::AuditReport`].

mod report;
mod theme;

pub use report::ReportPrinter;
pub use theme::{should_use_colors, Theme};
