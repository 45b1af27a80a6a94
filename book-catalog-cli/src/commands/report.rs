use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use book_catalog_core::GroupBy;
use book_catalog_lib::display::write_report;

use crate::CliError;
use crate::commands::CatalogContext;
use crate::console::Console;

/// Print one breakdown, or both (genre then author) when `by` is `None`.
pub(crate) fn run_report<W: Write>(
    ctx: &CatalogContext,
    by: Option<GroupBy>,
    out: &mut W,
) -> Result<(), CliError> {
    match by {
        Some(group_by) => write_group(ctx, group_by, out),
        None => {
            for (i, &group_by) in GroupBy::all().iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                let heading = format!("By {group_by}:");
                writeln!(out, "{}", heading.if_supports_color(Stdout, |t| t.bold()))?;
                write_group(ctx, group_by, out)?;
            }
            Ok(())
        }
    }
}

/// Ask which dimension to group by, then print that breakdown.
pub(crate) fn run_report_interactive<R: BufRead, W: Write>(
    ctx: &CatalogContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let Some(choice) = console.prompt("Group by (genre/author): ")? else {
        return Ok(());
    };
    match choice.parse::<GroupBy>() {
        Ok(group_by) => write_group(ctx, group_by, console.out()),
        Err(_) => {
            console.say("Choose 'genre' or 'author'.")?;
            Ok(())
        }
    }
}

fn write_group<W: Write>(ctx: &CatalogContext, group_by: GroupBy, out: &mut W) -> Result<(), CliError> {
    let rows = ctx
        .catalog
        .report(group_by)
        .map_err(|e| CliError::database(format!("Failed to build {} report: {}", group_by, e)))?;
    write_report(out, &rows)?;
    Ok(())
}
