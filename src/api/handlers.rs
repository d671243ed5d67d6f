//! API request handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use super::json::{document_to_json, to_document};
use super::routes::AppState;
use crate::error::Error;
use crate::store::MovieQuery;
use crate::types::summarize;

/// Page size for `GET /movies`
pub const LIST_LIMIT: i64 = 10;

/// Pattern used when `searchTerm` is absent; matches titles containing "undefined"
pub const ABSENT_SEARCH_TERM: &str = "undefined";

// Query parameters

/// Name of the search query parameter
pub const SEARCH_TERM_PARAM: &str = "searchTerm";

/// Search parameters read from raw query pairs, so repeated keys are kept
#[derive(Debug, Default)]
pub struct SearchParams {
    /// Every `searchTerm` value, in query-string order
    pub search_terms: Vec<String>,
}

impl SearchParams {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            search_terms: pairs
                .into_iter()
                .filter(|(key, _)| key == SEARCH_TERM_PARAM)
                .map(|(_, value)| value)
                .collect(),
        }
    }

    /// Case-insensitive title pattern; repeated values are joined with ","
    pub fn pattern(&self) -> String {
        if self.search_terms.is_empty() {
            ABSENT_SEARCH_TERM.to_string()
        } else {
            self.search_terms.join(",")
        }
    }
}

// Response types

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Every failure takes the same generic path: logged, then reported as a 500
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

type ApiResult = std::result::Result<Json<Value>, ApiError>;

// Handlers

/// Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// List up to ten movies in natural order
pub async fn list_movies(State(state): State<AppState>) -> ApiResult {
    let movies = state.store.find(&MovieQuery::All, Some(LIST_LIMIT)).await?;
    Ok(Json(Value::Array(movies.into_iter().map(document_to_json).collect())))
}

/// Insert the request body as a new movie, unvalidated
pub async fn create_movie(State(state): State<AppState>, Json(body): Json<Value>) -> ApiResult {
    let candidate = to_document(body)?;
    let outcome = state.store.insert_one(candidate).await?;
    tracing::info!("Inserted movie {}", outcome.inserted_id);
    Ok(Json(document_to_json(outcome.into_document())))
}

/// Search titles, returning summaries only
pub async fn search_movies(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult {
    let params = SearchParams::from_pairs(pairs);
    let query = MovieQuery::title_matches(params.pattern());
    let movies = state.store.find(&query, None).await?;
    Ok(Json(Value::Array(movies.iter().map(|m| document_to_json(summarize(m))).collect())))
}

/// Get a single movie by ObjectId, or `null` when none matches
pub async fn get_movie(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let query = MovieQuery::by_id(&id)?;
    let movie = state.store.find_one(&query).await?;
    Ok(Json(movie.map(document_to_json).unwrap_or(Value::Null)))
}
