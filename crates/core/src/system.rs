//! Operating system services used by resolution and execution.
//!
//! Everything that touches the filesystem or the process goes through
//! [`System`], so the resolver and invoker can be driven by a fake in tests.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

pub trait System {
    fn current_dir(&self) -> io::Result<PathBuf>;

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    fn is_dir(&self, path: &Path) -> bool;

    /// True for regular files only (directories and missing paths are not files).
    fn is_file(&self, path: &Path) -> bool;

    /// True if the invoking user may execute `path`.
    fn is_executable(&self, path: &Path) -> bool;

    /// Changes the working directory of the running process.
    fn change_dir(&self, path: &Path) -> io::Result<()>;

    /// Runs `command` as `<shell> -c <command>` with inherited stdio and waits for it.
    ///
    /// Returns the child's exit code, or `None` if it was killed by a signal.
    fn run_shell(&self, shell: &str, command: &str) -> io::Result<Option<i32>>;
}

/// The real operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostSystem;

impl System for HostSystem {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        path.canonicalize()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    #[cfg(unix)]
    fn is_executable(&self, path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        path.metadata()
            .map(|metadata| metadata.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    fn is_executable(&self, _path: &Path) -> bool {
        false
    }

    fn change_dir(&self, path: &Path) -> io::Result<()> {
        debug!("Changing directory to `{}`", path.display());
        std::env::set_current_dir(path)
    }

    fn run_shell(&self, shell: &str, command: &str) -> io::Result<Option<i32>> {
        let status = Command::new(shell)
            .args(["-c", command])
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?
            .wait()?;

        Ok(status.code())
    }
}
