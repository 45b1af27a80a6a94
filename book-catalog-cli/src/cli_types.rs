//! CLI type definitions: command enum and global flags.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use book_catalog_core::{ExportFormat, GroupBy};

#[derive(Parser)]
#[command(name = "book-catalog")]
#[command(about = "Keep a personal catalog of books", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding books.db and exports (defaults to `data` next to the executable)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only log warnings and errors (command output is unaffected)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    /// Command to run; without one, start the interactive prompt
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Add a book (prompts for title, author, genre and year)
    Add,

    /// List all books alphabetically by title
    List,

    /// Find books whose title, author or genre contains a keyword
    Search {
        /// Text to look for (case-insensitive)
        keyword: String,
    },

    /// Count books per genre and per author
    Report {
        /// Only report one dimension
        #[arg(value_name = "genre|author")]
        by: Option<GroupBy>,
    },

    /// Write the whole catalog to books.csv or books.json in the data directory
    Export {
        #[arg(value_name = "csv|json")]
        format: ExportFormat,
    },

    /// Start the interactive prompt (the default)
    Shell,
}
