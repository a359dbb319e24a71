use std::env;
use std::process::ExitCode;

use clap::Parser;
use jumprun_cli::cli_args::Args;
use jumprun_cli::dispatch::{dispatch, Context};
use jumprun_cli::output::{Console, Message, Terminal};
use jumprun_core::action::Action;
use jumprun_core::config;
use jumprun_core::error::Result;
use jumprun_core::registry::Registry;
use jumprun_core::system::HostSystem;
use log::debug;

fn execute(args: Args) -> Result<()> {
    let config_path = config::get_config_path(&args.config_path);
    debug!("Config path: `{}`", config_path);
    let settings = config::load_settings(&config_path)?;

    let database_path = config::get_database_path(&args.database_path, &settings);
    debug!("Database path: `{}`", database_path.display());
    let registry = Registry::open_at(&database_path)?;

    let context = Context {
        registry: &registry,
        system: &HostSystem,
        shell: settings.shell(env::var("SHELL").ok()),
    };

    dispatch(Action::from(args.command), &context, &mut Terminal)
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match execute(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let text = if e.is_fatal() {
                format!("Fatal: {e}")
            } else {
                e.to_string()
            };
            Terminal.emit(Message::error(text));
            ExitCode::FAILURE
        }
    }
}
