/// Errors raised while validating user-supplied input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("invalid year '{0}': expected a whole number")]
    InvalidYear(String),

    #[error("unknown grouping '{0}': choose 'genre' or 'author'")]
    UnknownGroupBy(String),

    #[error("unknown format '{0}': choose 'csv' or 'json'")]
    UnknownFormat(String),

    #[error("search keyword must not be empty")]
    EmptyKeyword,
}
