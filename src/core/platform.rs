//! Process-level entry helpers and error reporting.

use crate::core::cli::UsageError;

/// Report a failed run on stderr and exit with code 1.
///
/// Prints the error followed by its chain of causes. The `--help` hint is
/// only shown when the command line itself was at fault.
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("Error: {error}");
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
    if wants_usage_hint(&error) {
        eprintln!();
        eprintln!("Try running with --help for usage information.");
    }
    std::process::exit(1);
}

/// True when any error in the chain is a [`UsageError`]
fn wants_usage_hint(error: &anyhow::Error) -> bool {
    error
        .chain()
        .any(|cause| cause.downcast_ref::<UsageError>().is_some())
}

/// Parse command line arguments.
pub fn get_cli_args() -> crate::core::cli::CliArgs {
    use clap::Parser;
    crate::core::cli::CliArgs::parse()
}
