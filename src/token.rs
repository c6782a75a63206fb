//! Token decoding
//!
//! A JWT string consists of three Base64URL segments separated by dots:
//! `header.body.signature`. [`Token::decode`] splits the input, decodes
//! the first two segments (tolerating stripped padding, as most issuers
//! strip it) and parses each as a JSON object. The signature segment is
//! carried verbatim; this tool never verifies it.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use serde_json::{Map, Value};

use crate::error::{Error, PartError, Result};

/// A decoded JWT token
///
/// Header and body are arbitrary-shaped JSON objects; claims are not known
/// ahead of time, so both are kept as generic string-keyed maps. The
/// signature is the raw third segment, never decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub header: Map<String, Value>,
    pub body: Map<String, Value>,
    pub signature: String,
}

impl Token {
    /// Decode a JWT string into its three parts
    ///
    /// Header and body are decoded independently; either can be the cause
    /// of failure, and the error names which segment failed at which stage.
    ///
    /// # Example
    /// ```ignore
    /// let token = Token::decode("eyJ...")?;
    /// println!("{:?}", token.header);
    /// ```
    pub fn decode(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() != 3 {
            return Err(Error::Structure);
        }

        let header = decode_part(parts[0]).map_err(Error::Header)?;
        let body = decode_part(parts[1]).map_err(Error::Body)?;

        Ok(Self {
            header,
            body,
            signature: parts[2].to_string(),
        })
    }
}

/// Decode one segment and parse the bytes as a JSON object
fn decode_part(part: &str) -> std::result::Result<Map<String, Value>, PartError> {
    let bytes = decode_segment(part)?;
    let object = serde_json::from_slice(&bytes)?;
    Ok(object)
}

/// Base64URL-decode a segment, restoring stripped `=` padding first
fn decode_segment(part: &str) -> std::result::Result<Vec<u8>, base64::DecodeError> {
    let mut padded = part.to_string();
    while padded.len() % 4 != 0 {
        padded.push('=');
    }
    URL_SAFE.decode(padded)
}
