//! DNSimple error construction
//!
//! DNSimple error bodies (`{"message": "..."}`) are kept verbatim in
//! `HttpStatus::raw_message` and never mapped to finer variants.

use crate::error::ProviderError;
use crate::traits::ProviderErrorMapper;
use crate::types::Record;

use super::{DnsimpleClient, DnsimpleProvider, PROVIDER_NAME};

impl ProviderErrorMapper for DnsimpleProvider {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

impl ProviderErrorMapper for DnsimpleClient<'_> {
    fn provider_name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

impl DnsimpleProvider {
    /// DNSimple record ids are positive integers; anything else cannot be deleted.
    pub(crate) fn parse_record_id(&self, record: &Record) -> Result<u64, ProviderError> {
        record
            .id
            .parse::<u64>()
            .map_err(|e| ProviderError::InvalidRecordId {
                provider: self.provider_name().to_string(),
                record_id: record.id.clone(),
                detail: e.to_string(),
            })
    }

    /// 按错误类型选择日志级别
    pub(crate) fn log_failure(&self, operation: &str, zone: &str, err: &ProviderError) {
        if err.is_expected() {
            log::warn!("[{}] {operation} failed for zone {zone}: {err}", self.provider_name());
        } else {
            log::error!("[{}] {operation} failed for zone {zone}: {err}", self.provider_name());
        }
    }
}
