use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseDeskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Invalid number: '{input}'")]
    InvalidNumber { input: String },
}

pub type Result<T> = std::result::Result<T, CourseDeskError>;
