//! Storage layer for the movies collection

mod memory_store;
mod mongo_store;
mod query;

pub use memory_store::MemoryMovieStore;
pub use mongo_store::MongoMovieStore;
pub use query::MovieQuery;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{InsertOutcome, Movie};

/// Operations the HTTP layer needs from a document store
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Documents matching `query` in the store's natural order, capped at `limit` when given
    async fn find(&self, query: &MovieQuery, limit: Option<i64>) -> Result<Vec<Movie>>;

    /// Insert one document, returning the identifier it was stored under
    async fn insert_one(&self, movie: Movie) -> Result<InsertOutcome>;

    /// First document matching `query`, if any
    async fn find_one(&self, query: &MovieQuery) -> Result<Option<Movie>>;
}
