pub mod commands;
pub mod context;
pub mod git;
pub mod render;
pub mod settings;
pub mod snippet;
pub mod state;
