use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Data API returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Invalid data API URL: {0}")]
    InvalidUrl(String),
}
