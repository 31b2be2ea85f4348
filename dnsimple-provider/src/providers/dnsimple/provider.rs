//! DNSimple RecordProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::normalize_zone;
use crate::traits::{ProviderErrorMapper, RecordProvider};
use crate::types::Record;

use super::{DnsimpleProvider, DnsimpleRecord};

#[async_trait]
impl RecordProvider for DnsimpleProvider {
    fn id(&self) -> &'static str {
        "dnsimple"
    }

    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        let zone = normalize_zone(zone);

        let records = self
            .api()
            .list_records(zone)
            .await
            .inspect_err(|e| self.log_failure("get_records", zone, e))?;

        Ok(records.into_iter().map(Record::from).collect())
    }

    async fn append_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let zone = normalize_zone(zone);
        let api = self.api();

        let mut created = Vec::with_capacity(records.len());
        for record in records {
            let stored = match api.create_record(zone, &DnsimpleRecord::from(record)).await {
                Ok(stored) => stored,
                Err(e) => {
                    self.log_failure("append_records", zone, &e);
                    if !created.is_empty() {
                        log::warn!(
                            "[{}] {} record(s) already created in {zone} are left in place",
                            self.provider_name(),
                            created.len()
                        );
                    }
                    return Err(e);
                }
            };
            created.push(Record::from(stored));
        }

        log::debug!(
            "[{}] Created {} record(s) in {zone}",
            self.provider_name(),
            created.len()
        );
        Ok(created)
    }

    async fn set_records(&self, zone: &str, _records: &[Record]) -> Result<Vec<Record>> {
        // TODO: upsert needs a decision on how existing records are matched (name+type?)
        let err = self.not_implemented("set_records");
        self.log_failure("set_records", normalize_zone(zone), &err);
        Err(err)
    }

    async fn delete_records(&self, zone: &str, records: &[Record]) -> Result<Vec<Record>> {
        let zone = normalize_zone(zone);
        let api = self.api();

        for (done, record) in records.iter().enumerate() {
            let result = match self.parse_record_id(record) {
                Ok(id) => api.delete_record(zone, id).await,
                Err(e) => Err(e),
            };

            if let Err(e) = result {
                self.log_failure("delete_records", zone, &e);
                if done > 0 {
                    log::warn!(
                        "[{}] {done} record(s) already deleted from {zone} stay deleted",
                        self.provider_name()
                    );
                }
                return Err(e);
            }
        }

        log::debug!(
            "[{}] Deleted {} record(s) from {zone}",
            self.provider_name(),
            records.len()
        );
        Ok(records.to_vec())
    }
}
