//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - add: create a new todo item
//! - toggle: flip an item's completion flag
//! - rm: remove an item
//! - list: show items, optionally filtered

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Todor - a single-user todo list backed by a JSON file
#[derive(Parser, Debug)]
#[command(name = "todor")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new todo item
    Add {
        /// Description of the task
        text: String,
    },

    /// Toggle the completion flag of an item
    Toggle {
        /// Id of the item to toggle
        id: i64,
    },

    /// Remove an item
    Rm {
        /// Id of the item to remove
        id: i64,
    },

    /// List todo items
    List {
        /// Show only completed items
        #[arg(long, conflicts_with = "pending")]
        completed: bool,

        /// Show only pending items
        #[arg(long)]
        pending: bool,
    },
}
