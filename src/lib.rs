//! # jwt - command line JWT token parser
//!
//! > Decode a JWT and read it like a human.
//!
//! **jwt** splits an encoded token into its three dot-separated segments,
//! Base64URL-decodes header and body into generic JSON objects, and prints
//! a colorized report with the standard time claims (`iat`, `nbf`, `exp`)
//! translated into readable timestamps. The signature segment is shown
//! verbatim and never verified.
//!
//! ## Quick Start
//!
//! ```ignore
//! use jwt::Token;
//!
//! let token = Token::decode(encoded)?;
//! jwt::render(&token, &mut std::io::stdout())?;
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! input string
//!     │ split on '.' (must yield 3 segments)
//!     ▼
//! header / body segments ── Base64URL decode ── JSON object parse
//!     │
//!     ▼
//! Token (header, body, verbatim signature)
//!     │ render()
//!     ▼
//! colorized report on stdout
//! ```
//!
//! Decoding is all-or-nothing: a malformed token produces exactly one
//! error line naming the failing segment and stage, never a partial
//! report. This tool does not verify signatures and must not be used to
//! decide whether a token is trustworthy.

pub mod claims;
pub mod cli;
pub mod error;
pub mod render;
pub mod token;

pub use claims::resolve_time;
pub use cli::run;
pub use error::{Error, PartError, Result};
pub use render::render;
pub use token::Token;
