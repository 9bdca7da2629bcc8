use crate::builder::value::{Arg, Value};

/// Search text handed to the web-search operations.
///
/// `Absent` turns both operations into no-ops. `Null` is a real value: it is
/// bound as SQL `NULL`, which `websearch_to_tsquery` turns into a predicate
/// that matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchQuery {
    #[default]
    Absent,
    Null,
    Text(String),
}

impl SearchQuery {
    /// `None` means the caller has no search at all, not a `NULL` search.
    pub fn from_optional<S: Into<String>>(query: Option<S>) -> Self {
        match query {
            Some(q) => Self::Text(q.into()),
            None => Self::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl From<&str> for SearchQuery {
    fn from(q: &str) -> Self {
        Self::Text(q.to_string())
    }
}

impl From<String> for SearchQuery {
    fn from(q: String) -> Self {
        Self::Text(q)
    }
}

impl From<&String> for SearchQuery {
    fn from(q: &String) -> Self {
        Self::Text(q.clone())
    }
}

impl From<SearchQuery> for Arg {
    fn from(q: SearchQuery) -> Self {
        match q {
            SearchQuery::Absent => Arg::Undefined,
            SearchQuery::Null => Arg::Value(Value::Null),
            SearchQuery::Text(s) => Arg::Value(Value::Text(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_optional_none_is_absent() {
        assert!(SearchQuery::from_optional::<String>(None).is_absent());
        assert_eq!(
            SearchQuery::from_optional(Some("Shoes")),
            SearchQuery::Text("Shoes".into())
        );
    }

    #[test]
    fn test_empty_string_is_not_absent() {
        let q = SearchQuery::from("");
        assert!(!q.is_absent());
        assert_eq!(Arg::from(q), Arg::Value(Value::Text(String::new())));
    }

    #[test]
    fn test_null_maps_to_null_value() {
        assert_eq!(Arg::from(SearchQuery::Null), Arg::Value(Value::Null));
        assert_eq!(Arg::from(SearchQuery::Absent), Arg::Undefined);
    }
}
