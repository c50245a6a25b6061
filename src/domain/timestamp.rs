//! Update timestamp in a fixed time zone

use crate::error::{HitokotoError, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Zone the update line is rendered in
pub const DEFAULT_TIME_ZONE: &str = "Asia/Taipei";

/// RFC 1123 layout with a zone abbreviation, e.g. `Mon, 02 Jan 2006 15:04:05 CST`
pub const RFC1123_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %Z";

/// Look up an IANA time zone by name
pub fn load_time_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| HitokotoError::TimeZone(format!("Unknown time zone '{}': {}", name, e)))
}

/// Render an instant in the given zone using [`RFC1123_FORMAT`]
pub fn format_rfc1123(instant: DateTime<Utc>, zone: Tz) -> String {
    instant.with_timezone(&zone).format(RFC1123_FORMAT).to_string()
}
