use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, QuizError>;

#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not enough images for a quiz: {available} available, {required} required")]
    InsufficientItems { available: usize, required: usize },

    #[error("Cannot parse make and model from '{name}': {reason}")]
    InvalidFileName { name: String, reason: String },

    #[error("Source directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
