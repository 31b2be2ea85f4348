//! DNSimple API 类型定义 and conversions to the generic [`Record`].

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Record;

/// DNSimple API 通用响应 (`{"data": ...}`)
#[derive(Debug, Deserialize)]
pub struct DnsimpleResponse<T> {
    pub data: T,
}

/// DNSimple zone record
///
/// Zero-valued fields are left out of request bodies. The API sends `null` for
/// unused `priority` values, which decode as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsimpleRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub record_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u16>,
    #[serde(
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        with = "crate::utils::datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<DnsimpleRecord> for Record {
    fn from(r: DnsimpleRecord) -> Self {
        Self {
            id: r.id.map(|id| id.to_string()).unwrap_or_default(),
            record_type: r.record_type,
            name: r.name,
            value: r.content,
            ttl: Duration::from_secs(r.ttl.map_or(0, u64::from)),
            priority: r.priority.unwrap_or_default(),
        }
    }
}

/// Create payload for a generic record. The id is never sent; DNSimple assigns one.
impl From<&Record> for DnsimpleRecord {
    fn from(r: &Record) -> Self {
        let ttl = u32::try_from(r.ttl.as_secs()).unwrap_or(u32::MAX);
        Self {
            id: None,
            name: r.name.clone(),
            content: r.value.clone(),
            ttl: (ttl != 0).then_some(ttl),
            record_type: r.record_type.clone(),
            priority: (r.priority != 0).then_some(r.priority),
            created_at: None,
            updated_at: None,
        }
    }
}
