use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A stored book record.
///
/// Field order matters: it is the CSV column order and the JSON key order
/// used by exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i64,
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {} by {} [{}] ({})",
            self.id, self.title, self.author, self.genre, self.year
        )
    }
}

/// A validated book that has not been stored yet.
///
/// Only constructible through [`NewBook::new`], so every instance has
/// non-empty, trimmed text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    title: String,
    author: String,
    genre: String,
    year: i64,
}

impl NewBook {
    /// Validate and normalize the fields of a new record.
    ///
    /// Text fields are trimmed; the first empty one is reported by name.
    pub fn new(
        title: &str,
        author: &str,
        genre: &str,
        year: i64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: require_text("title", title)?,
            author: require_text("author", author)?,
            genre: require_text("genre", genre)?,
            year,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn genre(&self) -> &str {
        &self.genre
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    /// Attach the id assigned by the store.
    pub fn into_book(self, id: i64) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            year: self.year,
        }
    }
}

/// Trim `value` and reject it if nothing is left.
pub fn require_text(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

/// Parse a publication year. Any whole number is accepted, including
/// negative years.
pub fn parse_year(input: &str) -> Result<i64, ValidationError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidYear(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_book_trims_fields() {
        let book = NewBook::new("  Dune ", "Frank Herbert\t", " Sci-Fi", 1965).unwrap();
        assert_eq!(book.title(), "Dune");
        assert_eq!(book.author(), "Frank Herbert");
        assert_eq!(book.genre(), "Sci-Fi");
        assert_eq!(book.year(), 1965);
    }

    #[test]
    fn new_book_rejects_blank_fields() {
        assert_eq!(
            NewBook::new("", "Author", "Genre", 2000),
            Err(ValidationError::EmptyField("title"))
        );
        assert_eq!(
            NewBook::new("Title", "   ", "Genre", 2000),
            Err(ValidationError::EmptyField("author"))
        );
        assert_eq!(
            NewBook::new("Title", "Author", "\n", 2000),
            Err(ValidationError::EmptyField("genre"))
        );
    }

    #[test]
    fn first_empty_field_is_reported() {
        let err = NewBook::new(" ", " ", " ", 1).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField("title"));
    }

    #[test]
    fn parse_year_accepts_integers() {
        assert_eq!(parse_year("1965"), Ok(1965));
        assert_eq!(parse_year(" 2024\n"), Ok(2024));
        assert_eq!(parse_year("-500"), Ok(-500));
    }

    #[test]
    fn parse_year_rejects_non_numeric() {
        assert_eq!(
            parse_year("nineteen"),
            Err(ValidationError::InvalidYear("nineteen".to_string()))
        );
        assert!(parse_year("").is_err());
        assert!(parse_year("19.5").is_err());
    }

    #[test]
    fn into_book_keeps_fields() {
        let book = NewBook::new("Emma", "Jane Austen", "Classic", 1815)
            .unwrap()
            .into_book(7);
        assert_eq!(book.id, 7);
        assert_eq!(book.to_string(), "#7 Emma by Jane Austen [Classic] (1815)");
    }

    #[test]
    fn json_keys_follow_field_order() {
        let book = NewBook::new("Emma", "Jane Austen", "Classic", 1815)
            .unwrap()
            .into_book(1);
        let json = serde_json::to_string(&book).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"title":"Emma","author":"Jane Austen","genre":"Classic","year":1815}"#
        );
    }
}
