//! HTTP API layer

mod handlers;
pub mod json;
mod routes;

pub use handlers::{ABSENT_SEARCH_TERM, LIST_LIMIT};
pub use routes::{create_router, AppState};
