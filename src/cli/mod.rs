//! Command-line interface for kitcheck.
//!
//! This module provides the CLI argument parsing using clap's derive
//! macros. Running with no subcommand performs the full audit.

mod args;

pub use args::{Cli, Commands, CompletionsArgs};
