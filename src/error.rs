use thiserror::Error;
use vercel_runtime::StatusCode;

#[derive(Debug, Error)]
pub enum AppError {
    /// Required record fields are missing; carries the client-facing message.
    #[error("Validation failed: {0}")]
    Validation(String),
    /// The body could not be decoded in its declared encoding.
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// Completion service failures. Never surfaced by the generate endpoint,
    /// which degrades to the fallback prompt instead.
    #[error("External API error: {0}")]
    External(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::External(_) => StatusCode::BAD_GATEWAY,
            AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message for the `error` key, without the variant prefix used in logs.
    pub fn client_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::BadRequest(msg) | AppError::External(msg) => msg.clone(),
            AppError::Other(e) => e.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
