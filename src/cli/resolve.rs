/// Turn the raw argument vector into [`Options`].
use super::tokenizer::tokenize;
use super::vocabulary::{Command, Flag};
use crate::errors::InvalidCommand;
use crate::types::Options;

/// Resolve `args` (everything after the program path) into [`Options`].
///
/// Precedence, first match wins:
/// 1. `--help` / `-h` anywhere → [`Command::Help`], nothing else is checked.
/// 2. `--version` / `-v` anywhere → [`Command::Version`].
/// 3. The first bare token must be present and name a [`Command`] exactly.
///
/// Unknown flags, stray values and extra bare tokens never fail; they end up
/// in [`Options::unprocessed_arguments`]. Flags are not checked against the
/// resolved command.
///
/// # Errors
///
/// Returns [`InvalidCommand::Missing`] when no command name was given and
/// [`InvalidCommand::Unknown`] when it does not match any command.
pub fn resolve<I, S>(args: I) -> Result<Options, InvalidCommand>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let tokens = tokenize(args);

    if tokens.is_present(Flag::Help) {
        return Ok(Options::bare(Command::Help, tokens.into_leftovers()));
    }
    if tokens.is_present(Flag::Version) {
        return Ok(Options::bare(Command::Version, tokens.into_leftovers()));
    }

    let name = tokens.positional().ok_or(InvalidCommand::Missing)?;
    let command = name
        .parse::<Command>()
        .map_err(|_| InvalidCommand::Unknown {
            name: name.to_owned(),
        })?;

    let debug_requested = tokens.is_present(Flag::Debug);
    let force_requested = tokens.is_present(Flag::Force);
    let all_requested = tokens.is_present(Flag::All);
    let names = tokens.values(Flag::Name).map(str::to_owned).collect();

    Ok(Options {
        command,
        debug_requested,
        force_requested,
        all_requested,
        names,
        unprocessed_arguments: tokens.into_leftovers(),
    })
}

/// Whether `--debug` / `-d` appears in `args`, whatever else they contain.
///
/// Lets the caller pick a log level even when [`resolve`] fails.
#[must_use]
pub fn debug_requested<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    tokenize(args).is_present(Flag::Debug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_flag_wins_over_everything() {
        let inputs: [&[&str]; 6] = [
            &["--help"],
            &["-h"],
            &["bogus", "--help"],
            &["--version", "-h"],
            &["-n", "--name", "--force=1", "--help", "--", "x"],
            &["delete", "-dfah"],
        ];
        for args in inputs {
            let options = resolve(args.iter().copied()).unwrap();
            assert_eq!(options.command, Command::Help, "args: {args:?}");
        }
    }

    #[test]
    fn test_help_skips_flag_population() {
        let options = resolve(["delete", "--all", "--name", "a", "-h"]).unwrap();
        assert_eq!(options.command, Command::Help);
        assert!(!options.all_requested);
        assert!(options.names.is_empty());
    }

    #[test]
    fn test_version_flag() {
        let inputs: [&[&str]; 4] = [&["--version"], &["-v"], &["bogus", "-v"], &["-dv"]];
        for args in inputs {
            let options = resolve(args.iter().copied()).unwrap();
            assert_eq!(options.command, Command::Version, "args: {args:?}");
        }
    }

    #[test]
    fn test_help_beats_version() {
        let options = resolve(["-v", "-h"]).unwrap();
        assert_eq!(options.command, Command::Help);
    }

    #[test]
    fn test_missing_command() {
        assert_eq!(resolve(Vec::<String>::new()), Err(InvalidCommand::Missing));
        assert_eq!(resolve(["--debug", "--all"]), Err(InvalidCommand::Missing));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            resolve(["bogus"]),
            Err(InvalidCommand::Unknown {
                name: "bogus".to_owned()
            })
        );
        assert!(matches!(
            resolve(["Create"]),
            Err(InvalidCommand::Unknown { .. })
        ));
    }

    #[test]
    fn test_command_words_resolve() {
        assert_eq!(resolve(["help"]).unwrap().command, Command::Help);
        assert_eq!(resolve(["version"]).unwrap().command, Command::Version);
        assert_eq!(resolve(["create"]).unwrap().command, Command::Create);
        assert_eq!(resolve(["delete"]).unwrap().command, Command::Delete);
    }

    #[test]
    fn test_delete_names_in_order() {
        let options = resolve(["delete", "--name", "a", "--name", "b"]).unwrap();
        assert_eq!(options.command, Command::Delete);
        assert_eq!(options.names, vec!["a", "b"]);
        assert!(options.unprocessed_arguments.is_empty());
    }

    #[test]
    fn test_create_force() {
        let options = resolve(["create", "--force"]).unwrap();
        assert_eq!(options.command, Command::Create);
        assert!(options.force_requested);
        assert!(!options.all_requested);
        assert!(!options.debug_requested);
        assert!(options.names.is_empty());
    }

    #[test]
    fn test_unknown_flags_are_unprocessed() {
        let options = resolve(["delete", "--all", "--unknownflag", "x"]).unwrap();
        assert_eq!(options.command, Command::Delete);
        assert!(options.all_requested);
        assert_eq!(options.unprocessed_arguments, vec!["--unknownflag", "x"]);
    }

    #[test]
    fn test_flags_irrelevant_to_command_are_still_recorded() {
        let options = resolve(["delete", "-f", "-d"]).unwrap();
        assert!(options.force_requested);
        assert!(options.debug_requested);
    }

    #[test]
    fn test_create_keeps_service_arguments_for_downstream() {
        let options = resolve([
            "create",
            "--l2tp",
            "Office",
            "--endpoint",
            "vpn.example.com",
            "-d",
        ])
        .unwrap();
        assert_eq!(options.command, Command::Create);
        assert!(options.debug_requested);
        assert_eq!(
            options.unprocessed_arguments,
            vec!["--l2tp", "Office", "--endpoint", "vpn.example.com"]
        );
    }

    #[test]
    fn test_foreign_short_option_is_passed_through_untouched() {
        let options = resolve(["create", "-phunter2"]).unwrap();
        assert_eq!(options.command, Command::Create);
        assert!(options.names.is_empty());
        assert_eq!(options.unprocessed_arguments, vec!["-phunter2"]);

        let options = resolve(["delete", "-dxa"]).unwrap();
        assert!(!options.debug_requested);
        assert!(!options.all_requested);
        assert_eq!(options.unprocessed_arguments, vec!["-dxa"]);
    }

    #[test]
    fn test_command_may_follow_flags() {
        let options = resolve(["-n", "a", "delete"]).unwrap();
        assert_eq!(options.command, Command::Delete);
        assert_eq!(options.names, vec!["a"]);
    }

    #[test]
    fn test_empty_name_is_not_recorded() {
        let options = resolve(["create", "-n="]).unwrap();
        assert!(options.names.is_empty());
        assert_eq!(options.unprocessed_arguments, vec!["-n="]);
    }

    #[test]
    fn test_debug_requested_survives_failed_resolution() {
        assert!(resolve(["-d", "bogus"]).is_err());
        assert!(debug_requested(["-d", "bogus"]));
        assert!(debug_requested(["--debug"]));
        assert!(!debug_requested(["bogus", "-pd"]));
    }

    #[test]
    fn test_leftovers_on_help_are_kept() {
        let options = resolve(["--help", "--wat", "x", "y"]).unwrap();
        assert_eq!(options.unprocessed_arguments, vec!["--wat", "y"]);
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let args = ["delete", "-a", "-n", "x", "--what", "y"];
        assert_eq!(resolve(args).unwrap(), resolve(args).unwrap());
    }
}
