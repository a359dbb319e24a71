//! Console messages.
//!
//! Dispatch only produces [`Message`]s; a [`Console`] decides how they look.

use std::io::{self, stderr, stdout, Write};

use crossterm::style::Stylize;
use itertools::Itertools;
use jumprun_core::shortcut::Shortcut;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Info,
    Plain,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Plain,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

/// Receives messages as dispatch produces them.
pub trait Console {
    fn emit(&mut self, message: Message);
}

/// Collects messages instead of printing them.
impl Console for Vec<Message> {
    fn emit(&mut self, message: Message) {
        self.push(message);
    }
}

/// Prints to the terminal; errors go to stderr.
pub struct Terminal;

impl Console for Terminal {
    fn emit(&mut self, message: Message) {
        // Output failures (e.g. a closed pipe) are not worth aborting for
        let _ = match message.kind {
            MessageKind::Error => write_message(&mut stderr().lock(), &message),
            _ => write_message(&mut stdout().lock(), &message),
        };
    }
}

/// Writes one styled line and flushes the same stream.
fn write_message(out: &mut impl Write, message: &Message) -> io::Result<()> {
    let text = message.text.as_str();
    match message.kind {
        MessageKind::Success => writeln!(out, "{}", text.blue())?,
        MessageKind::Info => writeln!(out, "{}", text.yellow())?,
        MessageKind::Plain => writeln!(out, "{text}")?,
        MessageKind::Error => writeln!(out, "{}", text.red())?,
    }
    out.flush()
}

/// Formats one shortcut for `show`: its name, then its directory and command.
pub fn describe(shortcut: &Shortcut) -> String {
    [
        shortcut.name.clone(),
        format!("    path:    {}", shortcut.workdir.display()),
        format!("    command: {}", shortcut.command),
    ]
    .iter()
    .join("\n")
}
