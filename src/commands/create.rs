/// `create` command.
use crate::errors::CliError;
use crate::types::Options;

/// Run `macosvpn create`.
///
/// Service definitions arrive as unprocessed arguments; turning them into
/// system VPN services needs the `SystemConfiguration` backend, which this
/// build does not include.
///
/// # Errors
///
/// Always returns `CliError::Unsupported`.
pub fn run(options: &Options) -> Result<(), CliError> {
    tracing::debug!(
        force = options.force_requested,
        definitions = options.unprocessed_arguments.len(),
        "create requested"
    );
    if options.all_requested || !options.names.is_empty() {
        tracing::warn!("--all and --name only apply to `delete`, ignoring");
    }

    Err(CliError::Unsupported {
        command: options.command,
    })
}
