//! MongoDB-backed movie store

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{Client, Collection};

use super::{MovieQuery, MovieStore};
use crate::config::Config;
use crate::error::Result;
use crate::types::{InsertOutcome, Movie};

/// Movie store over a single long-lived MongoDB client
#[derive(Clone)]
pub struct MongoMovieStore {
    collection: Collection<Movie>,
}

impl MongoMovieStore {
    /// Build the client from the configured connection string.
    ///
    /// The driver connects lazily, so an unreachable server surfaces on the first query.
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = Client::with_uri_str(&config.database_url).await?;
        let collection = client
            .database(&config.database_name)
            .collection::<Movie>(&config.collection);

        tracing::info!(
            "Using collection {}.{}",
            config.database_name,
            config.collection
        );

        Ok(Self::from_collection(collection))
    }

    pub fn from_collection(collection: Collection<Movie>) -> Self {
        Self { collection }
    }
}

#[async_trait]
impl MovieStore for MongoMovieStore {
    async fn find(&self, query: &MovieQuery, limit: Option<i64>) -> Result<Vec<Movie>> {
        let mut find = self.collection.find(query.to_filter());
        if let Some(limit) = limit {
            find = find.limit(limit);
        }

        let cursor = find.await?;
        let movies: Vec<Movie> = cursor.try_collect().await?;
        tracing::debug!("find {:?} returned {} documents", query, movies.len());
        Ok(movies)
    }

    async fn insert_one(&self, movie: Movie) -> Result<InsertOutcome> {
        let result = self.collection.insert_one(movie).await?;
        Ok(InsertOutcome::acknowledged(result.inserted_id))
    }

    async fn find_one(&self, query: &MovieQuery) -> Result<Option<Movie>> {
        Ok(self.collection.find_one(query.to_filter()).await?)
    }
}
