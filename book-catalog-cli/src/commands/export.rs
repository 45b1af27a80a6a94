use std::io::{BufRead, Write};

use book_catalog_core::ExportFormat;
use book_catalog_lib::export_catalog;

use crate::CliError;
use crate::commands::CatalogContext;
use crate::console::Console;

pub(crate) fn run_export<W: Write>(
    ctx: &CatalogContext,
    format: ExportFormat,
    out: &mut W,
) -> Result<(), CliError> {
    let summary = export_catalog(&ctx.catalog, format, &ctx.data_dir)
        .map_err(|e| CliError::export(format!("Failed to export {}: {}", format, e)))?;
    writeln!(
        out,
        "Exported {} book(s) to {}",
        summary.count,
        summary.path.display()
    )?;
    Ok(())
}

/// Ask for a format, then export.
pub(crate) fn run_export_interactive<R: BufRead, W: Write>(
    ctx: &CatalogContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let Some(choice) = console.prompt("Format (csv/json): ")? else {
        return Ok(());
    };
    match choice.parse::<ExportFormat>() {
        Ok(format) => run_export(ctx, format, console.out()),
        Err(_) => {
            console.say("Unknown format. Try 'csv' or 'json'.")?;
            Ok(())
        }
    }
}
