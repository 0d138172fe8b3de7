pub mod clear_state;
pub mod save_prompt;
pub mod setup;
pub mod statusline;
pub mod uninstall;
