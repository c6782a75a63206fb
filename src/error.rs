//! Error types for token decoding
//!
//! Decoding a token can fail at three stages: splitting the input into
//! segments, Base64URL-decoding a segment, and parsing the decoded bytes
//! as JSON. Each failure keeps its underlying cause, so callers can match
//! on the kind while the `Display` output stays a single readable chain.

use thiserror::Error;

/// Errors that can occur while decoding a token string
///
/// The `Display` output is the full human-readable chain, e.g.
/// `failed to parse token header: failed to decode token part: <cause>`.
#[derive(Debug, Error)]
pub enum Error {
    /// Input does not split into exactly three dot-separated segments
    #[error("token should consist of 3 parts separated by dot symbol")]
    Structure,

    /// The header segment failed to decode or parse
    #[error("failed to parse token header: {0}")]
    Header(#[source] PartError),

    /// The body segment failed to decode or parse
    #[error("failed to parse token body: {0}")]
    Body(#[source] PartError),
}

/// Failure stages for a single token segment
#[derive(Debug, Error)]
pub enum PartError {
    /// Segment is not valid padding-tolerant Base64URL
    #[error("failed to decode token part: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Decoded bytes are not a JSON object
    #[error("failed to unmarshal token part: {0}")]
    Unmarshal(#[from] serde_json::Error),
}

/// Result type alias for token decoding
pub type Result<T> = std::result::Result<T, Error>;
