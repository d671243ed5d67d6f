//! Translation of movie lookups into store filters

use bson::{doc, oid::ObjectId, Document};

use crate::error::Result;

/// One lookup against the movies collection
#[derive(Debug, Clone, PartialEq)]
pub enum MovieQuery {
    /// Every document, no filter
    All,
    /// Documents whose `title` matches `pattern` as a case-insensitive regex
    TitleMatches { pattern: String },
    /// The document whose `_id` equals the given ObjectId
    ById(ObjectId),
}

impl MovieQuery {
    pub fn title_matches(pattern: impl Into<String>) -> Self {
        MovieQuery::TitleMatches {
            pattern: pattern.into(),
        }
    }

    /// Parse a raw identifier (24 hex characters) into an `_id` lookup
    pub fn by_id(raw: &str) -> Result<Self> {
        Ok(MovieQuery::ById(ObjectId::parse_str(raw)?))
    }

    /// Filter document understood by MongoDB
    pub fn to_filter(&self) -> Document {
        match self {
            MovieQuery::All => doc! {},
            MovieQuery::TitleMatches { pattern } => doc! {
                "title": { "$regex": pattern.as_str(), "$options": "i" }
            },
            MovieQuery::ById(id) => doc! { "_id": *id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_all_has_empty_filter() {
        assert_eq!(MovieQuery::All.to_filter(), doc! {});
    }

    #[test]
    fn test_title_filter_is_case_insensitive_regex() {
        let filter = MovieQuery::title_matches("love").to_filter();
        assert_eq!(
            filter,
            doc! { "title": { "$regex": "love", "$options": "i" } }
        );
    }

    #[test]
    fn test_by_id_parses_object_id() {
        let query = MovieQuery::by_id("573a1398f29313caabce9682").unwrap();
        let expected = ObjectId::parse_str("573a1398f29313caabce9682").unwrap();

        assert_eq!(query, MovieQuery::ById(expected));
        assert_eq!(query.to_filter(), doc! { "_id": expected });
    }

    #[test]
    fn test_by_id_rejects_malformed_identifiers() {
        for raw in ["search", "573a1398", "zzza1398f29313caabce9682", ""] {
            let err = MovieQuery::by_id(raw).unwrap_err();
            assert!(
                matches!(err, Error::InvalidIdentifier(_)),
                "{raw:?} should be rejected"
            );
        }
    }
}
