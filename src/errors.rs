// errors.rs
use thiserror::Error;

use crate::source::SourceError;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB, data API).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Database Error: {0}")]
    DbError(String),

    #[error("Data API Error: {0}")]
    Upstream(String),

    #[error("Spreadsheet Error: {0}")]
    XlsxError(String),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Unauthorized => 401,
            ServerError::Upstream(_) => 502,
            ServerError::DbError(_) | ServerError::XlsxError(_) | ServerError::InternalError => 500,
        }
    }
}

impl From<SourceError> for ServerError {
    fn from(err: SourceError) -> Self {
        ServerError::Upstream(err.to_string())
    }
}
