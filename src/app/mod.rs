pub mod api;
pub mod cli;
pub mod commands;
pub mod configuration;
mod context;
pub mod working_dir;

pub use context::AppContext;
