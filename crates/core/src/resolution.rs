//! Add-time resolution of a raw command into the line that gets stored.
//!
//! Resolution runs exactly once, when a shortcut is added. Running a shortcut
//! later replays the stored line without looking at the filesystem again.
//!
//! Commands are treated as opaque shell lines: the raw text is split on
//! whitespace only, with no quoting or escaping rules.

use std::path::{Path, PathBuf};

use log::debug;

use crate::config::expand_directory;
use crate::error::{Error, Result};
use crate::system::System;

const CURRENT_DIRECTORY_PREFIX: &str = "./";

/// Interpreters for script files that are not executable, keyed by extension.
const INTERPRETERS: &[(&str, &str)] = &[
    ("py", "python"),
    ("rb", "ruby"),
    ("pl", "perl"),
    ("sh", "sh"),
    ("php", "php"),
    ("jar", "java -jar"),
];

/// Looks up the interpreter for a file extension. Matching is case-sensitive.
pub fn interpreter_for(extension: &str) -> Option<&'static str> {
    INTERPRETERS
        .iter()
        .find(|(known, _)| *known == extension)
        .map(|(_, interpreter)| *interpreter)
}

fn join_command(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Computes the command line to store for `raw_command` run from `base_dir`.
///
/// - No regular file named like the first word in `base_dir`: stored as given.
/// - An executable file: stored as `./<file> <args>`, or as given when absolute.
/// - A non-executable file: prefixed with the interpreter for its extension.
///
/// # Errors
///
/// [`Error::EmptyCommand`] for a blank command, and
/// [`Error::UnresolvableInterpreter`] for a non-executable file with an
/// extension that has no known interpreter.
pub fn resolve_command(system: &dyn System, base_dir: &Path, raw_command: &str) -> Result<String> {
    let mut words = raw_command.split_whitespace();
    let Some(head) = words.next() else {
        return Err(Error::EmptyCommand);
    };
    let tail = words.collect::<Vec<_>>().join(" ");

    let file_name = head.strip_prefix(CURRENT_DIRECTORY_PREFIX).unwrap_or(head);
    let local_file = base_dir.join(file_name);

    let resolved = if file_name.is_empty() || !system.is_file(&local_file) {
        debug!("`{}` is not a local file, storing as a system command", head);
        join_command(&[head, &tail])
    } else if system.is_executable(&local_file) {
        debug!("`{}` is executable, running it directly", local_file.display());
        if Path::new(file_name).is_absolute() {
            join_command(&[file_name, &tail])
        } else {
            let executable = format!("{CURRENT_DIRECTORY_PREFIX}{file_name}");
            join_command(&[&executable, &tail])
        }
    } else {
        let extension = local_file
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or_default();
        let interpreter =
            interpreter_for(extension).ok_or_else(|| Error::unresolvable_interpreter(file_name))?;
        debug!(
            "`{}` is not executable, running it with `{}`",
            local_file.display(),
            interpreter
        );
        join_command(&[interpreter, file_name, &tail])
    };

    Ok(resolved)
}

/// Determines the absolute working directory a new shortcut is frozen to.
///
/// An explicit `directory` (with `~` expanded, relative paths taken from the
/// current directory) overrides the current directory and must exist.
///
/// # Errors
///
/// [`Error::WorkdirMissing`] if the override is not an existing directory, or
/// [`Error::Io`] if the current directory cannot be read.
pub fn resolve_workdir(system: &dyn System, directory: Option<&str>) -> Result<PathBuf> {
    let current_dir = system
        .current_dir()
        .map_err(|e| Error::io_error("working directory".to_string(), ".".to_string(), e))?;

    let Some(directory) = directory else {
        return Ok(current_dir);
    };

    let expanded = expand_directory(directory);
    let candidate = if expanded.is_absolute() {
        expanded
    } else {
        current_dir.join(expanded)
    };

    if !system.is_dir(&candidate) {
        return Err(Error::workdir_missing(candidate));
    }

    system
        .canonicalize(&candidate)
        .map_err(|_| Error::workdir_missing(candidate))
}
