//! Error types for the dynasty league data client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, LeagueError>;

#[derive(Error, Debug)]
pub enum LeagueError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("{what} not provided and {env_var} environment variable not set")]
    MissingConfig { what: &'static str, env_var: String },

    /// The store answered with a non-success status. Fields mirror the
    /// PostgREST error body.
    #[error("Store request failed ({status}): {message}")]
    Store {
        status: u16,
        code: Option<String>,
        message: String,
        details: Option<String>,
        hint: Option<String>,
    },

    #[error("Cache error: {message}")]
    Cache { message: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },
}

impl LeagueError {
    /// Store error code (`PGRST116`, `42P01`, ...) when the store supplied one.
    pub fn store_code(&self) -> Option<&str> {
        match self {
            LeagueError::Store { code, .. } => code.as_deref(),
            _ => None,
        }
    }
}
