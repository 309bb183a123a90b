//! Kitcheck CLI entry point.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use kitcheck::audit::Auditor;
use kitcheck::cli::{Cli, Commands};
use kitcheck::config;
use kitcheck::ui::{should_use_colors, ReportPrinter, Theme};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("kitcheck=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kitcheck=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Kitcheck starting with args: {:?}", cli);

    if let Some(Commands::Completions(args)) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
        return ExitCode::SUCCESS;
    }

    // Handle --no-color
    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Determine project root
    let project_root = cli
        .project
        .as_ref()
        .cloned()
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default());

    let config = match config::load(&project_root, cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };

    let theme = if should_use_colors() {
        Theme::new()
    } else {
        Theme::plain()
    };
    let printer = ReportPrinter::new(theme, cli.quiet);

    let report = Auditor::new(config).run(&project_root);
    printer.render(&report);

    // Advisory by default: findings never fail the run unless --strict.
    if cli.strict && !report.all_security_tools_found() {
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
