use std::io::{BufRead, Write};

use book_catalog_lib::display::{NO_MATCHES, write_books};

use crate::CliError;
use crate::commands::CatalogContext;
use crate::console::Console;

/// Search with a keyword given on the command line.
pub(crate) fn run_search<W: Write>(
    ctx: &CatalogContext,
    keyword: &str,
    out: &mut W,
) -> Result<(), CliError> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        writeln!(out, "Enter a keyword.")?;
        return Ok(());
    }

    let books = ctx
        .catalog
        .search_books(keyword)
        .map_err(|e| CliError::database(format!("Failed to search books: {}", e)))?;
    log::debug!("Search for '{}' matched {} books", keyword, books.len());
    write_books(out, &books, NO_MATCHES)?;
    Ok(())
}

/// Ask for a keyword until a non-empty one is given, then search.
pub(crate) fn run_search_interactive<R: BufRead, W: Write>(
    ctx: &CatalogContext,
    console: &mut Console<R, W>,
) -> Result<(), CliError> {
    loop {
        let Some(keyword) = console.prompt("Keyword (title/author/genre): ")? else {
            return Ok(());
        };
        if keyword.is_empty() {
            console.say("Enter a keyword.")?;
            continue;
        }
        return run_search(ctx, &keyword, console.out());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::*;

    fn search(ctx: &CatalogContext, keyword: &str) -> String {
        let mut out = Vec::new();
        run_search(ctx, keyword, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn finds_dune_by_lowercase_title() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);
        add(&ctx, "Dune", "Frank Herbert", "Sci-Fi", 1965);
        add(&ctx, "Emma", "Jane Austen", "Classic", 1815);

        assert_eq!(
            search(&ctx, "dune"),
            "#1 Dune by Frank Herbert [Sci-Fi] (1965)\n"
        );
    }

    #[test]
    fn no_match_message() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);
        add(&ctx, "Dune", "Frank Herbert", "Sci-Fi", 1965);
        assert_eq!(search(&ctx, "tolkien"), "(no matches)\n");
    }

    #[test]
    fn blank_keyword_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(search(&context(&dir), "  "), "Enter a keyword.\n");
    }

    #[test]
    fn interactive_reprompts_on_blank_keyword() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = context(&dir);
        add(&ctx, "Dune", "Frank Herbert", "Sci-Fi", 1965);
        let mut console = console("\nherbert\n");

        run_search_interactive(&ctx, &mut console).unwrap();

        let text = output(console);
        assert_eq!(text.matches("Keyword (title/author/genre): ").count(), 2);
        assert!(text.contains("Enter a keyword.\n"));
        assert!(text.ends_with("#1 Dune by Frank Herbert [Sci-Fi] (1965)\n"));
    }
}
