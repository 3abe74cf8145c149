//! Command-line interface
//!
//! Bootstrapping only: argument parsing and an interactive terminal runner
//! around the viewer. Nothing here carries core invariants.

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
