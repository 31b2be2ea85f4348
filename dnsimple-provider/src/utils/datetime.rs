//! RFC 3339 timestamp serde helpers
//!
//! DNSimple sends `created_at`/`updated_at` as RFC 3339 strings in UTC
//! (`2016-03-22T10:20:53Z`). Use with
//! `#[serde(default, with = "crate::utils::datetime", skip_serializing_if = "Option::is_none")]`.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `Some` as an RFC 3339 string with a `Z` suffix.
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        None => serializer.serialize_none(),
    }
}

/// Deserializes an RFC 3339 string (any offset, normalized to UTC). `null` and the
/// empty string decode as `None`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        Some(s) if !s.is_empty() => DateTime::parse_from_rfc3339(&s)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| Error::custom(format!("Invalid RFC3339 timestamp '{s}': {e}"))),
        _ => Ok(None),
    }
}
