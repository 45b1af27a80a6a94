use std::io::{BufRead, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use book_catalog_core::NewBook;
use book_catalog_core::book::require_text;
use book_catalog_core::parse_year;
use book_catalog_db::OperationError;

use crate::CliError;
use crate::commands::CatalogContext;
use crate::console::Console;

/// Prompt for a new book and store it.
///
/// An empty text field aborts right away; a bad year only re-asks for the
/// year. End of input at any prompt aborts without writing.
pub(crate) fn run_add<R: BufRead, W: Write>(
    ctx: &CatalogContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    let Some(title) = prompt_text(console, "Title: ", "title")? else {
        return Ok(());
    };
    let Some(author) = prompt_text(console, "Author: ", "author")? else {
        return Ok(());
    };
    let Some(genre) = prompt_text(console, "Genre: ", "genre")? else {
        return Ok(());
    };
    let Some(year) = prompt_year(console)? else {
        return Ok(());
    };

    let book = NewBook::new(&title, &author, &genre, year)
        .map_err(|e| CliError::other(e.to_string()))?;

    match ctx.catalog.add_book(book) {
        Ok(book) => {
            console.say(
                format!("Added book #{}.", book.id).if_supports_color(Stdout, |t| t.green()),
            )?;
            Ok(())
        }
        Err(OperationError::Duplicate { existing_id }) => {
            console.say(
                format!(
                    "Duplicate detected (same title+author+year as #{existing_id}). Not added."
                )
                .if_supports_color(Stdout, |t| t.yellow()),
            )?;
            Ok(())
        }
        Err(e) => Err(CliError::database(format!("Failed to add book: {}", e))),
    }
}

fn prompt_text<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
    field: &'static str,
) -> Result<Option<String>, CliError> {
    let Some(raw) = console.prompt(label)? else {
        return Ok(None);
    };
    match require_text(field, &raw) {
        Ok(value) => Ok(Some(value)),
        Err(_) => {
            console.say(format!("Please enter a non-empty {field}."))?;
            Ok(None)
        }
    }
}

fn prompt_year<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Option<i64>, CliError> {
    loop {
        let Some(raw) = console.prompt("Year: ")? else {
            return Ok(None);
        };
        match parse_year(&raw) {
            Ok(year) => return Ok(Some(year)),
            Err(_) => console.say("Invalid year. Please enter a number.")?,
        }
    }
}
