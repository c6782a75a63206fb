//! Command line entry surface
//!
//! [`run`] takes the output stream and the raw argument list so the whole
//! surface stays testable: the binary hands it `stdout` and `env::args`,
//! tests hand it a buffer. Anything other than exactly one token argument
//! prints the help text; a malformed token prints a single error line.
//! Neither case is a process failure.

use std::io::{self, Write};

use crate::render::render;
use crate::token::Token;

const HELP: &str = "jwt - command line JWT token parser\n\nUsage:\n    jwt [encoded token]\n";

/// Run one decode-then-render pass for the given argument list
///
/// `args` includes the program name, mirroring `env::args`.
pub fn run(out: &mut impl Write, args: &[String]) -> io::Result<()> {
    if args.len() != 2 {
        return writeln!(out, "{HELP}");
    }

    match Token::decode(&args[1]) {
        Ok(token) => render(&token, out),
        Err(err) => writeln!(out, "Token is not valid: {err}"),
    }
}
