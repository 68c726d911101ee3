use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortlyError {
    #[error("usage error: {0}")]
    Usage(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PortlyError>;
