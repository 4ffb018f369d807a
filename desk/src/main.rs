use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use item_core::{ItemClient, ItemPresenter, NewItem};
use tracing::info;

mod cli;
mod config;
mod console;
mod logging;
mod shell;
mod transport;

use cli::{Cli, Commands};
use config::Config;
use console::ConsoleView;
use shell::Shell;
use transport::UreqTransport;

fn main() -> Result<ExitCode> {
    logging::init();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(cli.base_url.as_deref(), cli.timeout);
    config.validate()?;
    info!(base_url = %config.base_url, timeout = ?config.http.timeout_seconds, "starting item-desk");

    let client = ItemClient::new(&config.base_url);
    let transport = UreqTransport::new(&config.http);
    let view = ConsoleView::new(std::io::stdout());
    let mut presenter = ItemPresenter::new(client, transport, view);

    // One-shot commands report their own failures through the view; the exit
    // code only says whether the action went through.
    let outcome = match cli.command {
        None | Some(Commands::Shell) => {
            Shell::new(presenter).run(std::io::stdin().lock())?;
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::List) => presenter.list(),
        Some(Commands::Add { name, description }) => {
            presenter.create(&NewItem { name, description })
        }
        Some(Commands::Update {
            id,
            name,
            description,
        }) => presenter.update(id, &NewItem { name, description }.with_id(id)),
        Some(Commands::Delete { id }) => presenter.delete(id),
    };

    Ok(match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    })
}
