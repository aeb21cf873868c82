use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnowtoothError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SnowtoothError>;
