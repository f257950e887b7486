/// `version` command: print the program version.
use crate::cli::help::render_version;
use crate::errors::CliError;

/// Run `macosvpn version` (or any invocation carrying `--version`).
///
/// # Errors
///
/// Cannot currently fail.
pub fn run() -> Result<(), CliError> {
    print!("{}", render_version());
    Ok(())
}
