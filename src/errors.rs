/// Errors surfaced to the user and their exit codes.
use thiserror::Error;

use crate::cli::Command;

/// No usable command could be determined from the arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCommand {
    /// No bare token was given where the command name was expected.
    #[error(
        "You must specify a command. For example `macosvpn create` or `macosvpn delete`. Try `--help`."
    )]
    Missing,

    /// A command name was given but it is not one we know.
    #[error("You specified an unknown command. Try `macosvpn create` or `macosvpn delete` instead.")]
    Unknown {
        /// The token that was taken as the command name.
        name: String,
    },
}

/// Any failure that ends the process with a non-zero status.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    InvalidCommand(#[from] InvalidCommand),

    /// The command resolved fine but this build has no backend to carry it out.
    #[error("`macosvpn {command}` is not supported by this build")]
    Unsupported {
        /// The resolved command.
        command: Command,
    },
}

impl CliError {
    /// Return the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::InvalidCommand(_) => exitcode::USAGE,
            Self::Unsupported { .. } => exitcode::UNAVAILABLE,
        }
    }
}
