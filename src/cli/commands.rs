//! CLI commands and argument parsing

use crate::fetch::DEFAULT_BASE_URL;
use clap::{Parser, Subcommand, ValueEnum};

/// Paginated remote-list viewer
#[derive(Parser, Debug)]
#[command(name = "pagekeeper")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Collection endpoint URL
    #[arg(short, long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(short, long, global = true, default_value = "30")]
    pub timeout: u64,

    /// Output format
    #[arg(short, long, global = true, default_value = "plain")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse pages interactively (n = next, p = prev, r = refresh, q = quit)
    Browse {
        /// Starting page
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Fetch a single page and exit
    Fetch {
        /// Page number
        #[arg(default_value = "1")]
        page: u32,
    },
}

/// How records are printed
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// One line per record
    Plain,
    /// Pretty-printed JSON
    Json,
}
