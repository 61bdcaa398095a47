use thiserror::Error;

/// Errors that can occur when talking to the metadata service
#[derive(Error, Debug)]
pub enum PosterClientError {
    /// Connection, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Metadata API returned {status_code}: {message}")]
    Api { status_code: u16, message: String },

    /// The body was not the JSON object we expected
    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, PosterClientError>;
