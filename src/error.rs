use thiserror::Error;

use crate::input::InputError;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("summary serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render {file}: {message}")]
    Chart { file: String, message: String },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
