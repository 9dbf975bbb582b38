//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Network-layer failure (connection, TLS, timeout). Surfaced as-is,
    /// never classified further by this layer.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API rejected the call with a non-zero envelope code.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request body could not be serialized before sending.
    #[error("encoding request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response envelope or its `data` payload did not match the
    /// expected shape. Indicates schema drift, not a business condition.
    #[error("decoding response: {0}")]
    Decode(#[source] serde_json::Error),

    /// A singular endpoint returned an empty result set.
    ///
    /// The wire contract wraps single results in a one-element `data` array,
    /// so "no row" arrives as `[]` and is mapped to this sentinel.
    #[error("results not found")]
    ResultsNotFound,
}

/// A business-level rejection decoded from the response envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("code: {code}, message: {message}")]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

impl ApiError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl SdkError {
    /// The envelope code, if this is an API error.
    pub fn api_code(&self) -> Option<i64> {
        match self {
            SdkError::Api(e) => Some(e.code),
            _ => None,
        }
    }
}
