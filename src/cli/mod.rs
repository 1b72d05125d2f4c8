//! CLI module
//!
//! Command-line interface for running schema inference over a samples
//! directory.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
