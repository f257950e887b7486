/// Usage text, generated by clap from the same vocabulary the resolver uses.
///
/// clap never parses anything here; it only lays out the help and version
/// strings so they stay in sync with [`Flag::ALL`] and [`Command::ALL`].
use clap::{Arg, ArgAction};

use super::vocabulary::{Command, Flag};

const BIN_NAME: &str = "macosvpn";

/// Build the clap description of the whole command line.
#[must_use]
pub fn clap_command() -> clap::Command {
    let subcommands = Command::ALL
        .into_iter()
        .map(|c| clap::Command::new(c.as_str()).about(c.about()));

    let args = Flag::ALL.into_iter().map(|flag| {
        let arg = Arg::new(flag.long())
            .long(flag.long())
            .short(flag.short())
            .help(flag.about())
            .help_heading(flag.scope().heading());
        if flag.takes_value() {
            arg.value_name("NAME").action(ArgAction::Append)
        } else {
            arg.action(ArgAction::SetTrue)
        }
    });

    clap::Command::new(BIN_NAME)
        .about("Create and delete macOS VPN services from the command line")
        .version(env!("CARGO_PKG_VERSION"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .disable_help_subcommand(true)
        .subcommand_value_name("COMMAND")
        .subcommands(subcommands)
        .args(args)
}

/// Full help text, without ANSI styling.
#[must_use]
pub fn render_help() -> String {
    clap_command().render_help().to_string()
}

/// `macosvpn <version>` followed by a newline.
#[must_use]
pub fn render_version() -> String {
    clap_command().render_version()
}
