use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot { message: String },
}

impl ParseError {
    pub fn invalid_snapshot(message: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            message: message.into(),
        }
    }
}
