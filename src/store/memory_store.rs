//! In-process movie store with the same query semantics as the MongoDB store

use async_trait::async_trait;
use bson::{oid::ObjectId, Bson, Document};
use regex::{Regex, RegexBuilder};
use tokio::sync::RwLock;

use super::{MovieQuery, MovieStore};
use crate::error::{Error, Result};
use crate::types::{InsertOutcome, Movie};

/// Movies kept in insertion order behind a lock
#[derive(Default)]
pub struct MemoryMovieStore {
    movies: RwLock<Vec<Movie>>,
}

impl MemoryMovieStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with documents, kept as given
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self {
            movies: RwLock::new(movies),
        }
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

/// Compiled form of a [`MovieQuery`]
enum Matcher<'a> {
    All,
    Title(Regex),
    Id(&'a ObjectId),
}

impl<'a> Matcher<'a> {
    fn compile(query: &'a MovieQuery) -> Result<Self> {
        Ok(match query {
            MovieQuery::All => Matcher::All,
            MovieQuery::TitleMatches { pattern } => Matcher::Title(
                RegexBuilder::new(pattern).case_insensitive(true).build()?,
            ),
            MovieQuery::ById(id) => Matcher::Id(id),
        })
    }

    fn matches(&self, movie: &Movie) -> bool {
        match self {
            Matcher::All => true,
            Matcher::Title(re) => {
                matches!(movie.get("title"), Some(Bson::String(t)) if re.is_match(t))
            }
            Matcher::Id(id) => {
                matches!(movie.get("_id"), Some(Bson::ObjectId(found)) if found == *id)
            }
        }
    }
}

#[async_trait]
impl MovieStore for MemoryMovieStore {
    async fn find(&self, query: &MovieQuery, limit: Option<i64>) -> Result<Vec<Movie>> {
        let matcher = Matcher::compile(query)?;
        // Zero means no limit; a negative limit caps at its absolute value
        let cap = match limit {
            Some(n) if n != 0 => n.unsigned_abs() as usize,
            _ => usize::MAX,
        };

        let movies = self.movies.read().await;
        Ok(movies
            .iter()
            .filter(|m| matcher.matches(m))
            .take(cap)
            .cloned()
            .collect())
    }

    async fn insert_one(&self, movie: Movie) -> Result<InsertOutcome> {
        let mut movies = self.movies.write().await;

        let (id, stored) = match movie.get("_id") {
            Some(id) => {
                let id = id.clone();
                if movies.iter().any(|m| m.get("_id") == Some(&id)) {
                    return Err(Error::DuplicateKey(format!("_id {}", id)));
                }
                (id, movie)
            }
            None => {
                // Generated ids go first, as the driver does
                let id = Bson::ObjectId(ObjectId::new());
                let mut stored = Document::new();
                stored.insert("_id", id.clone());
                for (key, value) in movie {
                    stored.insert(key, value);
                }
                (id, stored)
            }
        };

        movies.push(stored);
        Ok(InsertOutcome::acknowledged(id))
    }

    async fn find_one(&self, query: &MovieQuery) -> Result<Option<Movie>> {
        let matcher = Matcher::compile(query)?;
        let movies = self.movies.read().await;
        Ok(movies.iter().find(|m| matcher.matches(m)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bson::doc;

    fn titled(titles: &[&str]) -> MemoryMovieStore {
        MemoryMovieStore::with_movies(
            titles
                .iter()
                .map(|t| doc! { "_id": ObjectId::new(), "title": *t })
                .collect(),
        )
    }

    #[tokio::test]
    async fn test_find_respects_limit() {
        let store = titled(&["a", "b", "c", "d"]);

        let movies = store.find(&MovieQuery::All, Some(2)).await.unwrap();
        let titles: Vec<&str> = movies.iter().map(|m| m.get_str("title").unwrap()).collect();

        assert_eq!(titles, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_find_without_limit_returns_everything() {
        let store = titled(&["a", "b", "c"]);
        let movies = store.find(&MovieQuery::All, None).await.unwrap();
        assert_eq!(movies.len(), 3);
    }

    #[tokio::test]
    async fn test_title_match_is_case_insensitive() {
        let store = titled(&["The Matrix", "Matrix Reloaded", "Speed"]);

        let movies = store
            .find(&MovieQuery::title_matches("matrix"), None)
            .await
            .unwrap();

        assert_eq!(movies.len(), 2);
    }

    #[tokio::test]
    async fn test_title_match_skips_non_string_titles() {
        let store = MemoryMovieStore::with_movies(vec![
            doc! { "title": 1999 },
            doc! { "name": "no title" },
            doc! { "title": "1999" },
        ]);

        let movies = store
            .find(&MovieQuery::title_matches("1999"), None)
            .await
            .unwrap();

        assert_eq!(movies, vec![doc! { "title": "1999" }]);
    }

    #[tokio::test]
    async fn test_invalid_pattern_is_an_error() {
        let store = titled(&["Anything"]);

        let err = store
            .find(&MovieQuery::title_matches("(unclosed"), None)
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidPattern(_)));
    }

    #[tokio::test]
    async fn test_insert_generates_leading_id() {
        let store = MemoryMovieStore::new();

        let outcome = store
            .insert_one(doc! { "title": "Test Film", "year": 2024 })
            .await
            .unwrap();

        assert!(outcome.acknowledged);
        let id = outcome.inserted_id.as_object_id().unwrap();

        let stored = store.find_one(&MovieQuery::ById(id)).await.unwrap().unwrap();
        assert_eq!(stored.keys().next().map(String::as_str), Some("_id"));
        assert_eq!(stored.get_str("title").unwrap(), "Test Film");
        assert_eq!(stored.get_i32("year").unwrap(), 2024);
    }

    #[tokio::test]
    async fn test_insert_keeps_client_id_and_rejects_duplicates() {
        let store = MemoryMovieStore::new();
        let id = ObjectId::new();

        let outcome = store.insert_one(doc! { "_id": id, "title": "One" }).await.unwrap();
        assert_eq!(outcome.inserted_id, Bson::ObjectId(id));

        let err = store
            .insert_one(doc! { "_id": id, "title": "Two" })
            .await
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateKey(_)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_one_missing_is_none() {
        let store = titled(&["a"]);
        let found = store.find_one(&MovieQuery::ById(ObjectId::new())).await.unwrap();
        assert!(found.is_none());
    }
}
