#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! macosvpn — create and delete macOS VPN services.

mod cli;
mod commands;
mod errors;
mod logging;
mod types;

use std::process;

use errors::CliError;

fn main() {
    let args: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let options = match cli::resolve(args.iter().cloned()) {
        Ok(options) => options,
        Err(err) => {
            logging::setup(cli::debug_requested(args));
            if let errors::InvalidCommand::Unknown { name } = &err {
                tracing::debug!(%name, "no command matches");
            }
            exit_with(&CliError::from(err));
        }
    };

    logging::setup(options.debug_requested);
    tracing::debug!(?options, "resolved command line");

    if let Err(err) = commands::dispatch(&options) {
        exit_with(&err);
    }
}

fn exit_with(err: &CliError) -> ! {
    tracing::debug!(error = ?err, "exiting with failure");
    eprintln!("Error: {err}");
    process::exit(err.exit_code());
}
