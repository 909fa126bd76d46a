//! Entry point for the `runlog` CLI. It parses arguments, sets up logging,
//! dispatches to the command handler, and maps errors to exit codes.

use runlog::cli::Cli;
use runlog::error::RunError;
use runlog::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init_logging(cli.log_level, cli.verbose);

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {:#}", err);

            let code = err
                .downcast_ref::<RunError>()
                .map(RunError::exit_code)
                .unwrap_or(exit_codes::USER_ERROR);
            ExitCode::from(code as u8)
        }
    }
}
