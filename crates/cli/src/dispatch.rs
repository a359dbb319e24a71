//! Executes a parsed [`Action`] against the registry.
//!
//! Every expected failure comes back as an [`Error`]; nothing here prints an
//! error itself. Successful steps are reported through the [`Console`].

use jumprun_core::action::Action;
use jumprun_core::error::{Error, Result};
use jumprun_core::execution;
use jumprun_core::registry::Registry;
use jumprun_core::resolution::{resolve_command, resolve_workdir};
use jumprun_core::shortcut::{validate_name, Target};
use jumprun_core::system::System;
use log::debug;

use crate::output::{describe, Console, Message};

/// Everything an action needs, built once by `main`.
pub struct Context<'a> {
    pub registry: &'a Registry,
    pub system: &'a dyn System,
    pub shell: String,
}

pub fn dispatch(action: Action, context: &Context<'_>, console: &mut dyn Console) -> Result<()> {
    debug!("Dispatching {:?}", action);

    match action {
        Action::Add { name, command, dir } => add(context, console, &name, &command, dir.as_deref()),
        Action::Remove { target } => remove(context, console, &target),
        Action::Show { target } => show(context, console, &target),
        Action::Rename { old, new } => rename(context, console, &old, &new),
        Action::Run { name } => run(context, console, &name),
    }
}

fn add(
    context: &Context<'_>,
    console: &mut dyn Console,
    name: &str,
    raw_command: &str,
    dir: Option<&str>,
) -> Result<()> {
    validate_name(name)?;

    // Report the duplicate before resolution can fail for another reason
    if context.registry.exists(name) {
        return Err(Error::DuplicateName(name.to_string()));
    }

    let workdir = resolve_workdir(context.system, dir)?;
    let command = resolve_command(context.system, &workdir, raw_command)?;
    context.registry.create(name, &workdir, &command)?;

    console.emit(Message::success(format!("{name} has been added")));
    Ok(())
}

fn remove(context: &Context<'_>, console: &mut dyn Console, target: &Target) -> Result<()> {
    match target {
        Target::All => {
            let removed = context.registry.delete_all()?;
            console.emit(Message::success(format!(
                "All shortcuts have been removed ({removed} deleted)"
            )));
        }
        Target::Name(name) => {
            context.registry.delete(name)?;
            console.emit(Message::success(format!("{name} has been deleted")));
        }
    }

    Ok(())
}

fn show(context: &Context<'_>, console: &mut dyn Console, target: &Target) -> Result<()> {
    let shortcuts = context.registry.list(target)?;

    if shortcuts.is_empty() {
        return match target {
            Target::All => {
                console.emit(Message::info("No shortcuts found"));
                Ok(())
            }
            Target::Name(name) => Err(Error::NotFound(name.clone())),
        };
    }

    for shortcut in &shortcuts {
        console.emit(Message::plain(describe(shortcut)));
    }

    Ok(())
}

fn rename(context: &Context<'_>, console: &mut dyn Console, old: &str, new: &str) -> Result<()> {
    validate_name(new)?;
    context.registry.rename(old, new)?;

    console.emit(Message::success(format!("{old} has been renamed to {new}")));
    Ok(())
}

fn run(context: &Context<'_>, console: &mut dyn Console, name: &str) -> Result<()> {
    let shortcut = execution::enter(context.registry, context.system, name)?;

    console.emit(Message::info(format!("Running {name}.......")));
    execution::spawn(context.system, &context.shell, &shortcut)?;

    Ok(())
}
