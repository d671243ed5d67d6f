//! API route definitions

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use crate::store::MovieStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>) -> Self {
        Self { store }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Movies
        .route("/movies", get(handlers::list_movies).post(handlers::create_movie))
        // Must stay ahead of /movies/{id}
        .route("/movies/search", get(handlers::search_movies))
        .route("/movies/{id}", get(handlers::get_movie))

        // Health
        .route("/health", get(handlers::health))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
