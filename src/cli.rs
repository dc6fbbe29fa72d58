use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Board database file (defaults to ~/.pinboard.db)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log level for the file log (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a note with the given title
    Add {
        #[arg(value_name = "TITLE")]
        title: String,
    },
    /// Print all notes in board order
    List,
    /// Toggle a note's completed flag by position (1-based)
    Toggle {
        #[arg(value_name = "POSITION")]
        position: usize,
    },
    /// Delete a note by position (1-based)
    Delete {
        #[arg(value_name = "POSITION")]
        position: usize,
    },
    /// Remove every note from the board
    Clear,
    /// Generate shell completions
    Completions {
        #[arg(value_name = "SHELL")]
        shell: String,
    },
    /// Launch the interactive board
    Tui,
}
