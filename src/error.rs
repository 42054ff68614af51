// Error types surfaced by the render client
use crate::domain::transport::BoxError;
use thiserror::Error;

const MAX_BODY_SNIPPET: usize = 512;

#[derive(Debug, Error)]
pub enum GraphiteError {
    /// The base URL is unparsable or lacks a scheme or host
    #[error("invalid graphite endpoint {url:?}: {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// The request could not be sent or the connection failed
    #[error("failed to request {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    /// The response body does not match the render document shape
    #[error("failed to decode render response from {url}: {source}")]
    Decode {
        url: String,
        /// Offending body, truncated
        body: String,
        #[source]
        source: DecodeError,
    },
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("body is not a valid render document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("series {target:?} has unrepresentable timestamp {timestamp}")]
    Timestamp { target: String, timestamp: f64 },
}

/// Lossy UTF-8 view of a response body, cut at a char boundary
pub(crate) fn body_snippet(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= MAX_BODY_SNIPPET {
        return text.into_owned();
    }

    let mut end = MAX_BODY_SNIPPET;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}
