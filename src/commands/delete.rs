/// `delete` command.
use crate::errors::CliError;
use crate::types::Options;

/// Run `macosvpn delete`.
///
/// # Errors
///
/// Always returns `CliError::Unsupported`; removing services needs the
/// `SystemConfiguration` backend, which this build does not include.
pub fn run(options: &Options) -> Result<(), CliError> {
    tracing::debug!(all = options.all_requested, names = ?options.names, "delete requested");
    if options.force_requested {
        tracing::warn!("--force only applies to `create`, ignoring");
    }

    Err(CliError::Unsupported {
        command: options.command,
    })
}
