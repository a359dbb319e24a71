use std::path::PathBuf;

use crate::error::Error::{EmptyName, NameWithWhitespace, ReservedName};
use crate::error::Result;

/// Word that `rm` and `show` interpret as "every shortcut".
pub const ALL_KEYWORD: &str = "all";

/// Words the command line parses as subcommands, so `jr <name>` could never
/// reach a shortcut with one of these names.
pub const SUBCOMMAND_NAMES: &[&str] = &["add", "rm", "show", "rename", "help"];

/// A named binding of a working directory and a resolved command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub(crate) id: i64,
    pub name: String,
    pub workdir: PathBuf,
    pub command: String,
}

/// Which shortcuts `rm` and `show` act upon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    All,
    Name(String),
}

impl From<&str> for Target {
    fn from(value: &str) -> Self {
        if value == ALL_KEYWORD {
            Target::All
        } else {
            Target::Name(value.to_string())
        }
    }
}

impl From<String> for Target {
    fn from(value: String) -> Self {
        Target::from(value.as_str())
    }
}

/// Checks that a name can be stored and later addressed from the command line.
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EmptyName);
    }

    if name.chars().any(char::is_whitespace) {
        return Err(NameWithWhitespace(name.to_string()));
    }

    if name == ALL_KEYWORD || SUBCOMMAND_NAMES.contains(&name) {
        return Err(ReservedName(name.to_string()));
    }

    Ok(())
}
