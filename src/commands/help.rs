/// `help` command: print usage.
use crate::cli::help::render_help;
use crate::errors::CliError;

/// Run `macosvpn help` (or any invocation carrying `--help`).
///
/// # Errors
///
/// Cannot currently fail.
pub fn run() -> Result<(), CliError> {
    print!("{}", render_help());
    Ok(())
}
