use async_trait::async_trait;

use crate::error::{ProviderError, Result};
use crate::types::Record;

/// Provider 错误构造 Trait（内部使用）
/// 各 Provider 实现此 trait 以统一构造带 provider 标识的错误
pub(crate) trait ProviderErrorMapper {
    /// 返回 Provider 标识符
    fn provider_name(&self) -> &'static str;

    /// 快捷方法：序列化错误
    fn serialization_error(&self, detail: impl ToString) -> ProviderError {
        ProviderError::SerializationError {
            provider: self.provider_name().to_string(),
            detail: detail.to_string(),
        }
    }

    /// 快捷方法：未实现的操作
    fn not_implemented(&self, operation: &str) -> ProviderError {
        ProviderError::NotImplemented {
            provider: self.provider_name().to_string(),
            operation: operation.to_string(),
        }
    }
}

/// DNS record operations a host can drive for one zone.
///
/// Zone names may be passed with or without the trailing root dot.
/// Multi-record operations run one record at a time in input order and stop at the
/// first failure. Records handled before the failure keep their remote effect.
#[async_trait]
pub trait RecordProvider: Send + Sync {
    /// 提供商标识符
    fn id(&self) -> &'static str;

    /// Lists all records in the zone, in the order the API returns them.
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>>;

    /// Creates the records and returns them as stored remotely (with their new ids).
    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// Creates or updates the records so the zone matches them.
    async fn set_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;

    /// Deletes the records by id and returns the input records.
    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>>;
}
