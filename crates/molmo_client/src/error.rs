/// Error types for endpoint queries
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed stream chunk: {line}")]
    MalformedChunk {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("stream chunk missing result.output.text: {line}")]
    MissingText { line: String },

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, ApiError>;
