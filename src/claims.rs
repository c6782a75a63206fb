//! Time claim resolution
//!
//! The standard claims `iat`, `nbf` and `exp` hold Unix timestamps
//! (seconds since epoch). [`resolve_time`] turns a claim into a display
//! string without ever failing: missing or null claims resolve to
//! `"undefined"`, non-numeric values to `"invalid date"`, and anything
//! numeric to an RFC 822 style timestamp. Negative values are pre-epoch
//! dates and format like any other.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Display layout for resolved claims, e.g. `02 Jan 06 15:04 MST`
const TIME_LAYOUT: &str = "%d %b %y %H:%M %Z";

/// Resolve a Unix time claim from a token body into a display string
pub fn resolve_time(body: &Map<String, Value>, key: &str) -> String {
    let value = match body.get(key) {
        None | Some(Value::Null) => return "undefined".to_string(),
        Some(value) => value,
    };

    let Some(seconds) = value.as_f64() else {
        return "invalid date".to_string();
    };

    // Timestamps outside chrono's representable calendar range cannot
    // be rendered as a date.
    match DateTime::<Utc>::from_timestamp(seconds as i64, 0) {
        Some(when) => when.format(TIME_LAYOUT).to_string(),
        None => "invalid date".to_string(),
    }
}
