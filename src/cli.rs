use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "glance",
    about = "A fast, cached statusline for Claude Code",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the statusline from the session context on stdin (the default).
    Statusline,

    /// Hook: save the submitted prompt for statusline display.
    SavePrompt,

    /// Hook: clear statusline state at session start.
    ClearState,

    /// Configure Claude Code to use this statusline.
    Setup,

    /// Remove the statusline configuration from Claude Code.
    Uninstall,
}
