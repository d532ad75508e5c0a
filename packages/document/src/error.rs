use thiserror::Error;

/// Errors raised while reading an editor document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unrecognized document shape: {0}")]
    InvalidShape(String),
}

pub type DocumentResult<T> = Result<T, DocumentError>;
