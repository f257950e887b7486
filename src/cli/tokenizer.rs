/// Lenient tokenizer over the raw argument vector.
///
/// Built on `clap_lex` so that long/short/cluster/`=value` splitting follows
/// the same rules clap uses. Unlike clap, nothing here ever fails: tokens
/// that match no flag in [`Flag::ALL`] are kept as leftovers for the caller.
use std::collections::HashSet;
use std::ffi::OsStr;

use clap_lex::{ArgCursor, ParsedArg, RawArgs, ShortFlags};

use super::vocabulary::Flag;

/// Everything the tokenizer extracted from one argument vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokens {
    present: HashSet<Flag>,
    values: Vec<(Flag, String)>,
    positional: Option<String>,
    leftovers: Vec<String>,
}

impl Tokens {
    /// Whether `flag` appeared at least once (with a usable value, for valued flags).
    #[must_use]
    pub fn is_present(&self, flag: Flag) -> bool {
        self.present.contains(&flag)
    }

    /// Values given to `flag`, in order of appearance.
    pub fn values(&self, flag: Flag) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter(move |(f, _)| *f == flag)
            .map(|(_, v)| v.as_str())
    }

    /// The first bare token, if any.
    #[must_use]
    pub fn positional(&self) -> Option<&str> {
        self.positional.as_deref()
    }

    /// Tokens that matched neither a flag, a flag value, nor the positional slot.
    #[must_use]
    pub fn into_leftovers(self) -> Vec<String> {
        self.leftovers
    }

    fn record(&mut self, flag: Flag, value: Option<String>) {
        self.present.insert(flag);
        if let Some(value) = value {
            self.values.push((flag, value));
        }
    }

    fn bare(&mut self, token: String) {
        if self.positional.is_none() {
            self.positional = Some(token);
        } else {
            self.leftovers.push(token);
        }
    }
}

/// Split `args` (without the program path) into flags, the positional and leftovers.
#[must_use]
pub fn tokenize<I, S>(args: I) -> Tokens
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let raw = RawArgs::new(args.into_iter().map(Into::<String>::into));
    let mut cursor = raw.cursor();
    let mut tokens = Tokens::default();

    while let Some(arg) = raw.next(&mut cursor) {
        if arg.is_escape() {
            tokens.leftovers.push(lossy(arg.to_value_os()));
        } else if let Some((long, attached)) = arg.to_long() {
            long_flag(&raw, &mut cursor, &mut tokens, &arg, long, attached);
        } else if arg.is_negative_number() {
            tokens.bare(lossy(arg.to_value_os()));
        } else if let Some(shorts) = arg.to_short() {
            short_cluster(&raw, &mut cursor, &mut tokens, &arg, shorts);
        } else {
            tokens.bare(lossy(arg.to_value_os()));
        }
    }

    tokens
}

fn long_flag(
    raw: &RawArgs,
    cursor: &mut ArgCursor,
    tokens: &mut Tokens,
    arg: &ParsedArg<'_>,
    long: Result<&str, &OsStr>,
    attached: Option<&OsStr>,
) {
    let original = lossy(arg.to_value_os());
    let Some(flag) = long.ok().and_then(Flag::from_long) else {
        tokens.leftovers.push(original);
        return;
    };

    match (flag.takes_value(), attached) {
        (true, Some(value)) if value.is_empty() => tokens.leftovers.push(original),
        (true, Some(value)) => tokens.record(flag, Some(lossy(value))),
        (true, None) => match take_value(raw, cursor) {
            Some(value) => tokens.record(flag, Some(value)),
            None => tokens.leftovers.push(original),
        },
        (false, None) => tokens.record(flag, None),
        // `--force=yes` is malformed for a switch
        (false, Some(_)) => tokens.leftovers.push(original),
    }
}

fn short_cluster(
    raw: &RawArgs,
    cursor: &mut ArgCursor,
    tokens: &mut Tokens,
    arg: &ParsedArg<'_>,
    mut shorts: ShortFlags<'_>,
) {
    let original = lossy(arg.to_value_os());
    if !is_known_cluster(&original) {
        tokens.leftovers.push(original);
        return;
    }

    // Nothing is recorded until the whole cluster is known to be usable.
    let mut switches = Vec::new();
    let mut named = None;
    while let Some(Ok(letter)) = shorts.next_flag() {
        let Some(flag) = Flag::from_short(letter) else {
            break;
        };
        if !flag.takes_value() {
            switches.push(flag);
            continue;
        }

        // `-nfoo` and `-n=foo` carry the value inside the cluster.
        let attached = shorts.next_value_os().map(|v| {
            let v = lossy(v);
            v.strip_prefix('=').map(str::to_owned).unwrap_or(v)
        });
        let value = match attached {
            Some(value) if value.is_empty() => None,
            Some(value) => Some(value),
            None => take_value(raw, cursor),
        };
        let Some(value) = value else {
            tokens.leftovers.push(original);
            return;
        };
        named = Some((flag, value));
        break;
    }

    for flag in switches {
        tokens.record(flag, None);
    }
    if let Some((flag, value)) = named {
        tokens.record(flag, Some(value));
    }
}

/// Every letter up to the first value-taking flag must be a known short flag.
///
/// Anything else (`-phunter2`, `-dxa`) belongs to someone downstream and is
/// kept whole.
fn is_known_cluster(token: &str) -> bool {
    let Some(letters) = token.strip_prefix('-') else {
        return false;
    };
    for letter in letters.chars() {
        match Flag::from_short(letter) {
            Some(flag) if flag.takes_value() => return true,
            Some(_) => {}
            None => return false,
        }
    }
    true
}

/// Consume the next token as a flag value, unless it looks like a flag itself.
fn take_value(raw: &RawArgs, cursor: &mut ArgCursor) -> Option<String> {
    let next = raw.peek(cursor)?;
    if looks_like_flag(&next) {
        return None;
    }
    raw.next_os(cursor).map(lossy)
}

fn looks_like_flag(arg: &ParsedArg<'_>) -> bool {
    arg.is_escape() || arg.is_long() || (arg.is_short() && !arg.is_negative_number())
}

fn lossy(os: &OsStr) -> String {
    os.to_string_lossy().into_owned()
}
