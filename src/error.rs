//! Error types for the movies API

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Could not find environment variable with key: {0}. Have you set it?")]
    MissingEnvVar(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid movie identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<bson::oid::Error> for Error {
    fn from(err: bson::oid::Error) -> Self {
        Error::InvalidIdentifier(err.to_string())
    }
}
