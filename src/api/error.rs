use thiserror::Error;

/// Failures of a single call to the Rage4 API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never got a response (DNS, refused connection, timeout).
    #[error("Connection error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to parse API response: {source}. Response: {body}")]
    Decode {
        source: serde_json::Error,
        body: String,
    },

    /// The API answered 2xx but reported `status: false`.
    #[error("API rejected the request: {0}")]
    Rejected(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
