// src/cli/mod.rs
//! CLI argument surface and the command handler.

pub mod args;
pub mod handlers;

pub use args::Cli;
pub use handlers::handle_rank;
