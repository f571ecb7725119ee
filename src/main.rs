//! pigpen - browse and select farm records in the terminal.

use std::process::ExitCode;

use clap::Parser;
use pigpen::cli::{self, Cli};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    pigpen::logging::init(cli.verbose)?;

    let result = cli::run(cli);
    pigpen::logging::shutdown();

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e.user_message());
            if let Some(action) = e.suggested_action() {
                eprintln!("{}", action);
            }
            if e.is_critical() {
                Ok(ExitCode::from(2))
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}
