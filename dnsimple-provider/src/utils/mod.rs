//! Utility modules.

/// RFC 3339 timestamp serde helpers for API payloads.
pub mod datetime;

/// Log sanitization utilities to keep record contents out of logs.
pub mod log_sanitizer;
