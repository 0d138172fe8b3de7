mod cli;

use anyhow::Result;
use clap::Parser;
use glance::commands;
use glance::git::SystemGit;
use glance::state::StateStore;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Statusline) {
        Command::Statusline => {
            // Runs before every prompt redraw: never fail it, even on a
            // broken stdout pipe.
            let store = StateStore::from_home();
            let _ = commands::statusline::statusline(
                &mut std::io::stdin().lock(),
                &mut std::io::stdout(),
                &store,
                &SystemGit,
            );
        }
        Command::SavePrompt => {
            let store = StateStore::from_home();
            commands::save_prompt::save_prompt(&mut std::io::stdin().lock(), &store);
        }
        Command::ClearState => {
            commands::clear_state::clear_state(&StateStore::from_home());
        }
        Command::Setup => {
            commands::setup::setup(&mut std::io::stdout())?;
        }
        Command::Uninstall => {
            commands::uninstall::uninstall(&mut std::io::stdout())?;
        }
    }

    Ok(())
}
