//! Run-time replay of stored shortcuts.
//!
//! Invocation happens in two steps so callers can report between them:
//! [`enter`] finds the shortcut and moves into its directory, [`spawn`] runs
//! the stored command. Success means the command was dispatched; the child's
//! own exit code is handed back untouched.

use log::{info, warn};

use crate::error::{Error, Result};
use crate::registry::Registry;
use crate::shortcut::Shortcut;
use crate::system::System;

/// Looks up `name` and changes the process working directory to its workdir.
///
/// # Errors
///
/// [`Error::NotFound`] if there is no such shortcut (the directory is left
/// alone), [`Error::WorkdirMissing`] if its directory no longer exists.
pub fn enter(registry: &Registry, system: &dyn System, name: &str) -> Result<Shortcut> {
    let shortcut = registry.get(name)?;

    if !system.is_dir(&shortcut.workdir) {
        return Err(Error::workdir_missing(&shortcut.workdir));
    }

    system
        .change_dir(&shortcut.workdir)
        .map_err(|_| Error::workdir_missing(&shortcut.workdir))?;

    Ok(shortcut)
}

/// Runs the shortcut's command through `shell` and waits for it to finish.
///
/// # Errors
///
/// Returns [`Error::SubProcess`] only if the shell could not be started.
pub fn spawn(system: &dyn System, shell: &str, shortcut: &Shortcut) -> Result<Option<i32>> {
    info!(
        "Executing `{}` with `{}` in `{}`",
        shortcut.command,
        shell,
        shortcut.workdir.display()
    );

    let exit_code = system.run_shell(shell, &shortcut.command)?;

    match exit_code {
        Some(0) => {}
        Some(code) => warn!("`{}` exited with code {}", shortcut.name, code),
        None => warn!("`{}` was terminated by a signal", shortcut.name),
    }

    Ok(exit_code)
}
