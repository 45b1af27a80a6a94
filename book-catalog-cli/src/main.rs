//! book-catalog CLI
//!
//! Add, list, search, report on and export a personal catalog of books.

mod cli_types;
mod commands;
mod console;
mod error;
mod logging;
mod repl;

use std::io;
use std::path::PathBuf;

use clap::Parser;

use book_catalog_db::Catalog;

use cli_types::{Cli, Commands};
use commands::CatalogContext;
use console::Console;
pub(crate) use error::CliError;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.quiet, cli.logfile.as_deref()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let data_dir = resolve_data_dir(cli.data_dir)?;

    let catalog = Catalog::open(&data_dir)
        .map_err(|e| CliError::database(format!("Failed to open catalog database: {}", e)))?;
    log::debug!("Using data directory {}", data_dir.display());
    let ctx = CatalogContext::new(catalog, data_dir);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Add => {
            let mut console = Console::new(io::stdin().lock(), out);
            commands::add::run_add(&ctx, &mut console)
        }
        Commands::List => commands::list::run_list(&ctx, &mut out),
        Commands::Search { keyword } => commands::search::run_search(&ctx, &keyword, &mut out),
        Commands::Report { by } => commands::report::run_report(&ctx, by, &mut out),
        Commands::Export { format } => commands::export::run_export(&ctx, format, &mut out),
        Commands::Shell => {
            let mut console = Console::new(io::stdin().lock(), out);
            repl::run_repl(&ctx, &mut console)
        }
    }
}

/// The data directory as an absolute path: `--data-dir` if given,
/// otherwise `data` next to the executable.
fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf, CliError> {
    let dir = match data_dir {
        Some(dir) => dir,
        None => book_catalog_lib::default_data_dir()
            .map_err(|e| CliError::other(format!("Failed to resolve data directory: {}", e)))?,
    };
    std::path::absolute(&dir).map_err(|e| {
        CliError::other(format!(
            "Failed to resolve data directory {}: {}",
            dir.display(),
            e
        ))
    })
}
