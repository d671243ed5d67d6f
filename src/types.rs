//! Core types for the movies API

use bson::{doc, Bson, Document};

/// A movie is a free-form BSON document; no schema is enforced
pub type Movie = Document;

/// Fields kept by [`summarize`], in output order
pub const SUMMARY_FIELDS: [&str; 6] = ["title", "_id", "plot", "released", "imdb", "type"];

/// Copy only the summary fields out of a full movie document.
///
/// Field names and values are copied verbatim. Fields absent from the source are
/// left out rather than written as null.
pub fn summarize(movie: &Movie) -> Document {
    let mut summary = Document::new();
    for field in SUMMARY_FIELDS {
        if let Some(value) = movie.get(field) {
            summary.insert(field, value.clone());
        }
    }
    summary
}

/// Result of inserting one movie
#[derive(Debug, Clone, PartialEq)]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: Bson,
}

impl InsertOutcome {
    pub fn acknowledged(inserted_id: Bson) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }

    /// Wire shape returned to clients: `{ acknowledged, insertedId }`
    pub fn into_document(self) -> Document {
        doc! {
            "acknowledged": self.acknowledged,
            "insertedId": self.inserted_id,
        }
    }
}
