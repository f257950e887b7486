/// The fixed command and flag vocabulary.
///
/// Everything here is immutable data: the resolver and the help renderer both
/// read from the same tables, so adding a flag means adding one entry to
/// [`Flag::ALL`] and one match arm per accessor.
use std::fmt;
use std::str::FromStr;

/// Top-level operation requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Print usage information.
    Help,
    /// Print the program version.
    Version,
    /// Create one or more VPN services.
    Create,
    /// Delete VPN services by name, or all of them.
    Delete,
}

impl Command {
    /// All commands in the order they are listed in help output.
    pub const ALL: [Self; 4] = [Self::Create, Self::Delete, Self::Help, Self::Version];

    /// Textual form as typed on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Version => "version",
            Self::Create => "create",
            Self::Delete => "delete",
        }
    }

    /// One-line description for help output.
    #[must_use]
    pub const fn about(self) -> &'static str {
        match self {
            Self::Help => "Show this help",
            Self::Version => "Show the version",
            Self::Create => "Create VPN services",
            Self::Delete => "Delete VPN services",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a token is not the textual form of any [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommandName;

impl FromStr for Command {
    type Err = UnknownCommandName;

    /// Exact, case-sensitive match against [`Command::as_str`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(UnknownCommandName)
    }
}

/// Which part of the help output a flag is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Global,
    Create,
    Delete,
}

impl Scope {
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Global => "Global Options",
            Self::Create => "Create Options",
            Self::Delete => "Delete Options",
        }
    }
}

/// Every recognized command-line switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Version,
    Help,
    Debug,
    Force,
    All,
    Name,
}

impl Flag {
    pub const ALL: [Self; 6] = [
        Self::Version,
        Self::Help,
        Self::Debug,
        Self::Force,
        Self::All,
        Self::Name,
    ];

    /// Long form without the leading `--`.
    #[must_use]
    pub const fn long(self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Help => "help",
            Self::Debug => "debug",
            Self::Force => "force",
            Self::All => "all",
            Self::Name => "name",
        }
    }

    /// Short form without the leading `-`.
    #[must_use]
    pub const fn short(self) -> char {
        match self {
            Self::Version => 'v',
            Self::Help => 'h',
            Self::Debug => 'd',
            Self::Force => 'f',
            Self::All => 'a',
            Self::Name => 'n',
        }
    }

    /// Whether the flag consumes a value. Only `--name` does, once per occurrence.
    #[must_use]
    pub const fn takes_value(self) -> bool {
        matches!(self, Self::Name)
    }

    #[must_use]
    pub const fn scope(self) -> Scope {
        match self {
            Self::Version | Self::Help | Self::Debug => Scope::Global,
            Self::Force => Scope::Create,
            Self::All | Self::Name => Scope::Delete,
        }
    }

    #[must_use]
    pub const fn about(self) -> &'static str {
        match self {
            Self::Version => "Show the version and exit",
            Self::Help => "Show this help and exit",
            Self::Debug => "Print debug logs to stderr",
            Self::Force => "Overwrite existing services with the same name",
            Self::All => "Delete every VPN service",
            Self::Name => "Name of a service to delete (repeatable)",
        }
    }

    /// Look up a flag by its long form (`"force"`, not `"--force"`).
    #[must_use]
    pub fn from_long(long: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.long() == long)
    }

    /// Look up a flag by its short letter.
    #[must_use]
    pub fn from_short(short: char) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.short() == short)
    }
}
