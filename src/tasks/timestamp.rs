//! Lenient parsing of the `created_at_*` filters.
//!
//! Accepts RFC 3339 (any offset, normalized to UTC), a bare
//! `YYYY-MM-DDTHH:MM:SS` read as UTC, or a date-only `YYYY-MM-DD` read as
//! midnight UTC. A blank string is the same as an absent filter.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};

/// Parses a filter timestamp in any of the accepted forms.
fn parse(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&naive));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// `deserialize_with` target for `Option<DateTime<Utc>>` filter fields.
pub(crate) fn deserialize_optional<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(text) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    parse(text).map(Some).ok_or_else(|| {
        de::Error::custom(format!(
            "invalid timestamp '{text}': expected RFC 3339 or YYYY-MM-DD"
        ))
    })
}
