//! Configuration for the movies API, read from the process environment

use crate::error::{Error, Result};

pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
pub const PORT_VAR: &str = "PORT";
pub const DATABASE_NAME_VAR: &str = "DATABASE_NAME";
pub const COLLECTION_VAR: &str = "MOVIES_COLLECTION";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// MongoDB connection string
    pub database_url: String,

    /// Database holding the movies collection
    pub database_name: String,

    /// Name of the movies collection
    pub collection: String,

    /// HTTP server port
    pub http_port: u16,
}

impl Config {
    /// Load config from the environment, reading a `.env` file first if one exists
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load config through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let database_url = non_empty(DATABASE_URL_VAR)
            .ok_or_else(|| Error::MissingEnvVar(DATABASE_URL_VAR.to_string()))?;

        let http_port = match non_empty(PORT_VAR) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| Error::Config(format!("{}={:?}: {}", PORT_VAR, raw, e)))?,
            None => default_http_port(),
        };

        Ok(Self {
            database_url,
            database_name: non_empty(DATABASE_NAME_VAR).unwrap_or_else(default_database_name),
            collection: non_empty(COLLECTION_VAR).unwrap_or_else(default_collection),
            http_port,
        })
    }
}

// Default value functions

fn default_http_port() -> u16 {
    4000
}

fn default_database_name() -> String {
    "sample_mflix".to_string()
}

fn default_collection() -> String {
    "movies".to_string()
}
