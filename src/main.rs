//! pysetup CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use pysetup::cli::{resolve_settings, BootstrapCommand, Cli, Command};
use pysetup::shell::{is_ci, SystemRunner};
use pysetup::ui::{create_ui, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("pysetup=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pysetup=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("pysetup starting with args: {:?}", cli);

    let output_mode = OutputMode::from_flags(cli.verbose, cli.quiet);

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = create_ui(!is_ci(), output_mode);
    let plan = cli.plan();

    // The version probe never echoes; its output is only parsed.
    let result = cli
        .project_root()
        .and_then(|root| resolve_settings(&plan, root, &mut SystemRunner::new(false)))
        .and_then(|settings| {
            let runner = SystemRunner::new(output_mode.shows_tool_output());
            BootstrapCommand::new(settings, plan, Box::new(runner)).execute(ui.as_mut())
        });

    match result {
        Ok(result) => ExitCode::from(result.process_exit_code()),
        Err(e) => {
            ui.error(&e.to_string());
            ExitCode::from(1)
        }
    }
}
