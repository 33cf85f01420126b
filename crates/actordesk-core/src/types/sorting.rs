//! Sorting types for list endpoints.

use serde::{Deserialize, Serialize};

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl SortDirection {
    /// Return the SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }

    /// The opposite direction.
    pub fn reversed(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// A closed set of columns that a listing may be ordered by.
pub trait SortColumn: Copy + Eq + Send + Sync + 'static {
    /// Column used when no key, or an unknown key, is requested.
    const DEFAULT: Self;

    /// Resolve a query-string key into a column.
    fn from_key(key: &str) -> Option<Self>;

    /// The query-string key for this column.
    fn key(&self) -> &'static str;
}

/// Sort order made of a column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortField<C> {
    /// Column to sort by.
    pub column: C,
    /// Sort direction.
    #[serde(default)]
    pub direction: SortDirection,
}

impl<C: SortColumn> SortField<C> {
    /// Create a new sort field.
    pub fn new(column: C, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Create an ascending sort on the given column.
    pub fn asc(column: C) -> Self {
        Self::new(column, SortDirection::Asc)
    }

    /// Create a descending sort on the given column.
    pub fn desc(column: C) -> Self {
        Self::new(column, SortDirection::Desc)
    }

    /// Parse a `sort` query value such as `last_name` or `-last_name`.
    ///
    /// Unknown keys silently fall back to the default column, ascending.
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = raw.map(str::trim).unwrap_or_default();
        let (direction, key) = match raw.strip_prefix('-') {
            Some(rest) => (SortDirection::Desc, rest),
            None => (SortDirection::Asc, raw),
        };

        match C::from_key(key) {
            Some(column) => Self::new(column, direction),
            None => Self::asc(C::DEFAULT),
        }
    }

    /// Render back into the query-string form accepted by [`parse`](Self::parse).
    pub fn to_query(&self) -> String {
        match self.direction {
            SortDirection::Asc => self.column.key().to_string(),
            SortDirection::Desc => format!("-{}", self.column.key()),
        }
    }
}

impl<C: SortColumn> Default for SortField<C> {
    fn default() -> Self {
        Self::asc(C::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Column {
        Id,
        Name,
    }

    impl SortColumn for Column {
        const DEFAULT: Self = Column::Id;

        fn from_key(key: &str) -> Option<Self> {
            match key {
                "id" => Some(Self::Id),
                "name" => Some(Self::Name),
                _ => None,
            }
        }

        fn key(&self) -> &'static str {
            match self {
                Self::Id => "id",
                Self::Name => "name",
            }
        }
    }

    #[test]
    fn test_parse_known_keys() {
        assert_eq!(
            SortField::<Column>::parse(Some("name")),
            SortField::asc(Column::Name)
        );
        assert_eq!(
            SortField::<Column>::parse(Some("-name")),
            SortField::desc(Column::Name)
        );
    }

    #[test]
    fn test_unknown_key_falls_back() {
        assert_eq!(
            SortField::<Column>::parse(Some("password")),
            SortField::asc(Column::Id)
        );
        assert_eq!(
            SortField::<Column>::parse(Some("-")),
            SortField::asc(Column::Id)
        );
        assert_eq!(SortField::<Column>::parse(None), SortField::default());
    }

    #[test]
    fn test_query_round_trip() {
        let field = SortField::desc(Column::Name);
        assert_eq!(field.to_query(), "-name");
        assert_eq!(SortField::<Column>::parse(Some(&field.to_query())), field);
    }
}
