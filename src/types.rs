/// The resolved invocation handed from argument parsing to the commands.
use crate::cli::Command;

/// What the user asked for, fully resolved.
///
/// Built once by [`crate::cli::resolve`] and never mutated afterwards.
/// Flags are recorded regardless of which command they belong to; commands
/// decide for themselves which ones matter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub command: Command,
    /// `--debug` / `-d`.
    pub debug_requested: bool,
    /// `--force` / `-f`, meaningful for `create`.
    pub force_requested: bool,
    /// `--all` / `-a`, meaningful for `delete`.
    pub all_requested: bool,
    /// One entry per `--name` / `-n`, in the order given.
    pub names: Vec<String>,
    /// Tokens no flag or the command slot consumed, in input order.
    pub unprocessed_arguments: Vec<String>,
}

impl Options {
    /// Options carrying only a command and leftovers; every flag unset.
    #[must_use]
    pub fn bare(command: Command, unprocessed_arguments: Vec<String>) -> Self {
        Self {
            command,
            debug_requested: false,
            force_requested: false,
            all_requested: false,
            names: Vec::new(),
            unprocessed_arguments,
        }
    }
}
