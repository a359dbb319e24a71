//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate and turns it into a typed [`Action`] for dispatch.

use clap::{Parser, Subcommand};
use jumprun_core::action::Action;
use log::warn;

/// Command-line arguments for the `jr` binary.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use jumprun_cli::cli_args::Args;
///
/// let args = Args::parse_from(["jr", "show", "all"]);
/// assert!(args.database_path.is_none());
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = "jr", version, about, term_width = 0)]
pub struct Args {
    /// Path to the settings file YAML.
    ///
    /// If not provided, defaults to `~/.jumprun/config.yml`.
    #[arg(long, short = 'c', global = true)]
    pub config_path: Option<String>,

    /// Path to the shortcut database.
    ///
    /// Overrides `database_path` from the settings file. If neither is given,
    /// defaults to `~/.jumprun/shortcuts.db`.
    #[arg(long, short = 'd', global = true)]
    pub database_path: Option<String>,

    #[command(subcommand)]
    pub command: Subcommands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Subcommands {
    /// Add a new shortcut that runs a command in a directory.
    ///
    /// Everything after the name is the command. A local script that is not
    /// executable is run with the interpreter matching its extension.
    /// `--dir <dir>` may come before the name or after the command.
    Add {
        /// Directory to run the command in, instead of the current directory.
        #[arg(long)]
        dir: Option<String>,

        /// Name to invoke the shortcut by.
        name: String,

        /// The command, with any arguments.
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Remove a shortcut, or every shortcut with `rm all`.
    Rm {
        /// Shortcut name, or `all`.
        target: String,
    },

    /// Show a shortcut, or every shortcut with `show all`.
    Show {
        /// Shortcut name, or `all`.
        target: String,
    },

    /// Rename a shortcut.
    Rename {
        /// Current name.
        old: String,

        /// New name.
        new: String,
    },

    /// Run the shortcut with the given name.
    #[command(external_subcommand)]
    Run(Vec<String>),
}

impl From<Subcommands> for Action {
    fn from(value: Subcommands) -> Self {
        match value {
            Subcommands::Add { dir, name, command } => {
                let (command, trailing_dir) = split_trailing_dir(command);
                if let (Some(dir), Some(trailing_dir)) = (&dir, &trailing_dir) {
                    warn!("`--dir` given twice, using `{}` over `{}`", dir, trailing_dir);
                }
                Action::Add {
                    name,
                    command: command.join(" "),
                    dir: dir.or(trailing_dir),
                }
            }
            Subcommands::Rm { target } => Action::Remove {
                target: target.into(),
            },
            Subcommands::Show { target } => Action::Show {
                target: target.into(),
            },
            Subcommands::Rename { old, new } => Action::Rename { old, new },
            Subcommands::Run(arguments) => {
                let mut arguments = arguments.into_iter();
                // clap always supplies the subcommand name itself
                let name = arguments.next().unwrap_or_default();
                let extra: Vec<String> = arguments.collect();
                if !extra.is_empty() {
                    warn!("Ignoring extra arguments to `{}`: {:?}", name, extra);
                }
                Action::Run { name }
            }
        }
    }
}

const DIR_FLAG: &str = "--dir";

/// Pulls a trailing `--dir <dir>` or `--dir=<dir>` off the command words.
///
/// The command is collected with `trailing_var_arg`, so clap hands the option
/// over as plain words when it follows the command. At least one command word
/// is always left behind.
fn split_trailing_dir(mut command: Vec<String>) -> (Vec<String>, Option<String>) {
    let count = command.len();

    if count >= 3 && command[count - 2] == DIR_FLAG {
        let dir = command.pop();
        command.pop();
        return (command, dir);
    }

    if count >= 2 {
        if let Some(dir) = command[count - 1].strip_prefix("--dir=") {
            let dir = dir.to_string();
            command.pop();
            return (command, Some(dir));
        }
    }

    (command, None)
}
