//! Command line interface for pairvote.

pub mod commands;
pub mod interactive;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pairvote - pairwise elimination voting.
#[derive(Parser, Debug)]
#[command(name = "pairvote")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file.
    #[arg(short, long, default_value = "pairvote.toml")]
    pub config: PathBuf,

    /// Verbose mode.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode.
    #[arg(short, long)]
    pub quiet: bool,

    /// Command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Writes a default configuration in the target directory.
    Init {
        /// Target directory (default: current directory).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Starts a contest and replays a list of actions, printing the final state.
    Run {
        /// JSON array of entries (default: entries from the configuration).
        #[arg(short, long)]
        entries: Option<PathBuf>,

        /// JSON array of actions to apply after the first vote is opened.
        #[arg(short, long)]
        actions: Option<PathBuf>,
    },

    /// Applies a single action to a state file and prints the new state.
    Apply {
        /// JSON state file.
        #[arg(short, long)]
        state: PathBuf,

        /// Action as JSON, e.g. '{"type": "NEXT"}'.
        #[arg(short, long)]
        action: String,
    },

    /// Runs a contest interactively.
    Play {
        /// JSON array of entries (default: entries from the configuration).
        #[arg(short, long)]
        entries: Option<PathBuf>,
    },

    /// Shows version.
    Version,
}
