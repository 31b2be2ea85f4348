use std::time::Duration;

use serde::{Deserialize, Serialize};

// ============ Record ============

/// A provider-agnostic DNS record.
///
/// This is the shape hosts exchange with a [`RecordProvider`](crate::RecordProvider).
/// `id` is assigned by the provider and is only meaningful for records returned by
/// [`get_records`](crate::RecordProvider::get_records) or
/// [`append_records`](crate::RecordProvider::append_records).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Provider-assigned record id (empty for records not yet created).
    #[serde(default)]
    pub id: String,
    /// Record type token, e.g. `"A"` or `"TXT"`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record name relative to the zone (`""` for the apex).
    pub name: String,
    /// Record value (address, text, target...).
    pub value: String,
    /// Time to live.
    #[serde(default)]
    pub ttl: Duration,
    /// Priority (MX/SRV), `0` when unused.
    #[serde(default)]
    pub priority: u16,
}

impl Record {
    /// Convenience constructor for a record without id, ttl or priority.
    pub fn new(
        record_type: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            record_type: record_type.into(),
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Sets the TTL.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: u16) -> Self {
        self.priority = priority;
        self
    }
}
