use crate::error::ValidationError;

/// Field used to bucket records in a report.
///
/// Closed set: each variant maps to a fixed column name, so a report query
/// never contains user text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupBy {
    Genre,
    Author,
}

static ALL_GROUP_BY: &[GroupBy] = &[GroupBy::Genre, GroupBy::Author];

impl GroupBy {
    /// Column in the `books` table.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Author => "author",
        }
    }

    /// Both dimensions, in the order a full report prints them.
    pub fn all() -> &'static [GroupBy] {
        ALL_GROUP_BY
    }
}

impl std::fmt::Display for GroupBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

impl std::str::FromStr for GroupBy {
    type Err = ValidationError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "genre" => Ok(Self::Genre),
            "author" => Ok(Self::Author),
            _ => Err(ValidationError::UnknownGroupBy(s.trim().to_string())),
        }
    }
}

/// One line of a report: a distinct field value and how many records have it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCount {
    pub value: String,
    pub count: i64,
}

impl std::fmt::Display for GroupCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.value, self.count)
    }
}
