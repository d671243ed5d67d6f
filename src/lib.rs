//! mflix-api - JSON HTTP API over the MongoDB `sample_mflix` movies collection

pub mod config;
pub mod error;
pub mod types;

pub mod store;
pub mod api;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
