//! Jumprun CLI Library
//!
//! This crate provides the `jr` command-line interface: argument parsing,
//! dispatch of the parsed action, and console output.
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing into a typed action
//! - [`dispatch`]: Runs an action against the registry and resolver
//! - [`output`]: Messages and how they are printed
//!
//! # Examples
//!
//! ```bash
//! # Bind `site` to the current directory and a script
//! jr add site serve.py --port 8000
//!
//! # Bind a command to another directory
//! jr add --dir ~/projects/api tests cargo test
//!
//! # Run it from anywhere
//! jr site
//!
//! # Inspect, rename, remove
//! jr show all
//! jr rename site blog
//! jr rm blog
//! ```

pub mod cli_args;
pub mod dispatch;
pub mod output;
