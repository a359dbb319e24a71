//! Jumprun Core Library
//!
//! This crate provides the core functionality for jumprun, a tool that binds a
//! memorable name to a directory and a command so it can be run from anywhere.
//!
//! # Key Features
//!
//! - **Registry**: SQLite-backed storage of shortcuts with unique names
//! - **Resolution**: One-time inference of how to run a local script
//! - **Execution**: Replaying a stored shortcut in its working directory
//! - **Configuration Management**: Settings file and database path handling
//!
//! # Examples
//!
//! ```no_run
//! use jumprun_core::registry::Registry;
//! use jumprun_core::resolution::{resolve_command, resolve_workdir};
//! use jumprun_core::system::HostSystem;
//!
//! let registry = Registry::open_at("/tmp/shortcuts.db".as_ref())?;
//! let workdir = resolve_workdir(&HostSystem, Some("~/projects/site"))?;
//! let command = resolve_command(&HostSystem, &workdir, "serve.py --port 8000")?;
//! registry.create("site", &workdir, &command)?;
//! # Ok::<(), jumprun_core::error::Error>(())
//! ```

pub mod action;
pub mod config;
pub mod error;
pub mod execution;
pub mod registry;
pub mod resolution;
pub mod shortcut;
pub mod system;
