pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// Inspect the WordPane audit trail.
#[derive(Parser, Debug)]
#[command(name = "wordpane-audit", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Content directory holding the audit log
    #[arg(long, global = true, env = "WORDPANE_CONTENT_DIR")]
    pub content_dir: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the most recent audit log lines
    Last {
        /// Number of lines to show (defaults to 50; zero or negative
        /// values fall back to the default)
        #[arg(allow_negative_numbers = true)]
        n: Option<i64>,
    },
}
