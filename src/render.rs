//! Colorized report rendering
//!
//! Turns a decoded [`Token`] into a labeled, color-highlighted report:
//! header and body as tab-indented JSON, the three standard time claims
//! as readable timestamps, and the raw signature. Colors are fixed per
//! section and written as plain ANSI foreground escape sequences.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::claims::resolve_time;
use crate::token::Token;

/// escape character for terminal color change
const ESCAPE: &str = "\x1b";

// Foreground text colors, one per report section
const FG_RED: u8 = 31;
const FG_GREEN: u8 = 32;
const FG_YELLOW: u8 = 33;
const FG_HI_BLACK: u8 = 90;
const FG_RESET: u8 = 0;

/// Write the full colorized report for a decoded token
///
/// Sections appear in a fixed order: header (green), body (yellow),
/// time claims (bright black), signature (red), then a color reset.
pub fn render(token: &Token, out: &mut impl Write) -> io::Result<()> {
    set_color(out, FG_GREEN)?;
    write_part(out, "Header", &to_indented_json(&token.header))?;
    set_color(out, FG_YELLOW)?;
    write_part(out, "Body", &to_indented_json(&token.body))?;
    set_color(out, FG_HI_BLACK)?;
    writeln!(out, "Issued at: {}", resolve_time(&token.body, "iat"))?;
    writeln!(out, "Not before: {}", resolve_time(&token.body, "nbf"))?;
    writeln!(out, "Expires at: {}", resolve_time(&token.body, "exp"))?;
    set_color(out, FG_RED)?;
    write_part(out, "Signature", &token.signature)?;
    set_color(out, FG_RESET)
}

/// Serialize an object as tab-indented JSON with keys in lexicographic order
fn to_indented_json(object: &Map<String, Value>) -> String {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    // Serializing an in-memory map cannot fail
    object
        .serialize(&mut serializer)
        .expect("JSON object serialization cannot fail");
    String::from_utf8(buf).expect("serde_json output is valid UTF-8")
}

/// Write one labeled section of the report
fn write_part(out: &mut impl Write, caption: &str, part: &str) -> io::Result<()> {
    write!(out, "\n✻ {caption}\n{part}\n")
}

fn set_color(out: &mut impl Write, color: u8) -> io::Result<()> {
    write!(out, "{ESCAPE}[{color}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object(json: &str) -> Map<String, Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_indented_json_uses_tabs_and_sorted_keys() {
        let text = to_indented_json(&object(r#"{"typ":"JWT","alg":"HS256"}"#));
        assert_eq!(text, "{\n\t\"alg\": \"HS256\",\n\t\"typ\": \"JWT\"\n}");
    }

    #[test]
    fn test_indented_json_nests_with_tabs() {
        let text = to_indented_json(&object(r#"{"a":{"b":1}}"#));
        assert_eq!(text, "{\n\t\"a\": {\n\t\t\"b\": 1\n\t}\n}");
    }

    #[test]
    fn test_render_section_order_and_colors() {
        let token = Token {
            header: object(r#"{"alg":"HS256"}"#),
            body: object(r#"{"iat":1516239022}"#),
            signature: "sig".to_string(),
        };

        let mut out = Vec::new();
        render(&token, &mut out).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert_eq!(
            report,
            "\x1b[32m\n✻ Header\n{\n\t\"alg\": \"HS256\"\n}\n\
             \x1b[33m\n✻ Body\n{\n\t\"iat\": 1516239022\n}\n\
             \x1b[90mIssued at: 18 Jan 18 01:30 UTC\n\
             Not before: undefined\n\
             Expires at: undefined\n\
             \x1b[31m\n✻ Signature\nsig\n\
             \x1b[0m"
        );
    }

    #[test]
    fn test_render_empty_objects() {
        let token = Token {
            header: Map::new(),
            body: Map::new(),
            signature: String::new(),
        };

        let mut out = Vec::new();
        render(&token, &mut out).unwrap();
        let report = String::from_utf8(out).unwrap();

        assert!(report.contains("\n✻ Header\n{}\n"));
        assert!(report.contains("Issued at: undefined\n"));
        assert!(report.ends_with("\n✻ Signature\n\n\x1b[0m"));
    }
}
