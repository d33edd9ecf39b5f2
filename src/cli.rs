// src/cli.rs
//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sensei",
    version,
    about = "Beginner-oriented checker for small code snippets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Override the directory holding history and points files
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a snippet for common beginner mistakes
    Analyze {
        /// Snippet text; when omitted, reads --file or stdin
        snippet: Option<String>,
        /// Read the snippet from a file instead of the argument or stdin
        #[arg(long, value_name = "FILE")]
        file: Option<PathBuf>,
        /// Emit findings as JSON
        #[arg(long)]
        json: bool,
        /// Skip the history record and the reward point for this run
        #[arg(long)]
        no_save: bool,
    },
    /// Show stored analysis sessions, newest first
    History {
        /// Show at most N sessions
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
        /// Emit sessions as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show reward points and the level they map to
    Points {
        /// Reset the counter to zero first
        #[arg(long)]
        reset: bool,
        /// Emit points and level as JSON
        #[arg(long)]
        json: bool,
    },
}
