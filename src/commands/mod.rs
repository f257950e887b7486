/// Command dispatch: routes the resolved `Command` to its implementation.
pub mod create;
pub mod delete;
pub mod help;
pub mod version;

use crate::cli::Command;
use crate::errors::CliError;
use crate::types::Options;

/// Dispatch resolved `Options` to the handler for its command.
///
/// # Errors
///
/// Returns `CliError` on any command failure.
pub fn dispatch(options: &Options) -> Result<(), CliError> {
    if !options.unprocessed_arguments.is_empty() {
        tracing::debug!(
            command = %options.command,
            unprocessed = ?options.unprocessed_arguments,
            "arguments left for the command to interpret"
        );
    }

    match options.command {
        Command::Help => help::run(),
        Command::Version => version::run(),
        Command::Create => create::run(options),
        Command::Delete => delete::run(options),
    }
}
