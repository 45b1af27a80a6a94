//! Interactive mode: read one command per line until `quit`.

use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::commands::{CatalogContext, add, export, list, report, search};
use crate::console::Console;

const COMMANDS: &str = "add | list | search | report | export | quit";

pub(crate) fn run_repl<R: BufRead, W: Write>(
    ctx: &CatalogContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    console.say(format!(
        "{} Commands: {COMMANDS}",
        "Book Catalog ready.".if_supports_color(Stdout, |t| t.bold())
    ))?;

    while let Some(line) = console.prompt("> ")? {
        let command = line.to_lowercase();
        log::debug!("REPL command: '{}'", command);
        match command.as_str() {
            "" => continue,
            "add" => add::run_add(ctx, console)?,
            "list" => list::run_list(ctx, console.out())?,
            "search" => search::run_search_interactive(ctx, console)?,
            "report" => report::run_report_interactive(ctx, console)?,
            "export" => export::run_export_interactive(ctx, console)?,
            "help" => console.say(format!("Commands: {COMMANDS}"))?,
            "quit" | "exit" => break,
            _ => console.say(format!("Unknown command. Try: {COMMANDS}"))?,
        }
    }
    Ok(())
}
