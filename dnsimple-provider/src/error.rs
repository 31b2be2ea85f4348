use serde::{Deserialize, Serialize};

/// Error type for all DNSimple provider operations.
///
/// Each variant includes a `provider` field identifying the provider that produced the
/// error, plus variant-specific context. All variants are serializable for structured
/// error reporting.
///
/// No variant is retried by this crate. Multi-record operations stop at the first error
/// and leave the remote effects of earlier records in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A network-level error occurred (DNS resolution failure, connection refused,
    /// body read failure, etc.).
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The API answered with a status outside `200..=299`.
    ///
    /// Authentication failures (401/403) surface through this variant as well.
    HttpStatus {
        /// Provider that produced the error.
        provider: String,
        /// HTTP status code.
        status: u16,
        /// Raw response body, if any.
        raw_message: Option<String>,
    },

    /// Failed to parse the provider's API response.
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// A record id is not a valid numeric DNSimple record id.
    InvalidRecordId {
        /// Provider that produced the error.
        provider: String,
        /// The offending id.
        record_id: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// The operation is not supported by this provider.
    NotImplemented {
        /// Provider that produced the error.
        provider: String,
        /// Name of the rejected operation.
        operation: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => (400..500).contains(status),
            Self::InvalidRecordId { .. } | Self::NotImplemented { .. } => true,
            Self::NetworkError { .. }
            | Self::Timeout { .. }
            | Self::ParseError { .. }
            | Self::SerializationError { .. } => false,
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                provider, status, ..
            } => {
                write!(f, "[{provider}] Error status: {status}")
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::SerializationError { provider, detail } => {
                write!(f, "[{provider}] Serialization error: {detail}")
            }
            Self::InvalidRecordId {
                provider,
                record_id,
                detail,
            } => {
                write!(f, "[{provider}] Invalid record id '{record_id}': {detail}")
            }
            Self::NotImplemented {
                provider,
                operation,
            } => {
                write!(f, "[{provider}] {operation} is not implemented")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;
