//! GoDaddy record operations

use async_trait::async_trait;

use crate::error::{BatchError, BatchResult, Result};
use crate::providers::common::full_name_to_relative;
use crate::traits::{DnsRecordProvider, RecordAppender, RecordDeleter, RecordGetter, RecordSetter};
use crate::types::Record;

use super::{GODADDY_PROVIDER_ID, GodaddyProvider, GodaddyRecord, PROVIDER_NAME};

impl GodaddyProvider {
    /// Creates one record with an additive `PATCH`.
    ///
    /// The name is sent relative to the zone (`"@"` for the apex). Existing records
    /// of the same `(type, name)` are kept. Only `200 OK` counts as success.
    pub async fn create_record(&self, zone: &str, record: &Record) -> Result<()> {
        let name = full_name_to_relative(&record.name, zone);
        let url = self.records_url(zone, &[])?;
        log::debug!(
            "[{PROVIDER_NAME}] Creating {} record '{name}' in {zone}",
            record.record_type
        );
        self.patch_json(url, &[GodaddyRecord::from_record(record, name)])
            .await
    }

    /// Deletes every record sharing `record`'s `(type, name)`.
    ///
    /// `data` and `ttl` are not sent. A missing target is reported as the API
    /// error the upstream returns (usually 404).
    pub async fn delete_record(&self, zone: &str, record: &Record) -> Result<()> {
        let name = full_name_to_relative(&record.name, zone);
        let url = self.records_url(zone, &[record.record_type.as_str(), name.as_str()])?;
        log::debug!(
            "[{PROVIDER_NAME}] Deleting {} records '{name}' in {zone}",
            record.record_type
        );
        self.delete(url).await
    }
}

/// Runs `op` over `records` in order, stopping at the first failure.
async fn apply_in_order<'a, F, Fut>(records: &'a [Record], mut op: F) -> BatchResult
where
    F: FnMut(&'a Record) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let mut completed = Vec::with_capacity(records.len());
    for record in records {
        if let Err(source) = op(record).await {
            return Err(BatchError { completed, source });
        }
        completed.push(record.clone());
    }
    Ok(completed)
}

#[async_trait]
impl RecordGetter for GodaddyProvider {
    async fn get_records(&self, zone: &str) -> Result<Vec<Record>> {
        let url = self.records_url(zone, &[])?;
        let records: Vec<GodaddyRecord> = self.get_json(url).await?;
        log::debug!("[{PROVIDER_NAME}] Fetched {} records for {zone}", records.len());
        Ok(records.into_iter().map(Record::from).collect())
    }
}

#[async_trait]
impl RecordAppender for GodaddyProvider {
    async fn append_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        apply_in_order(records, |record| self.create_record(zone, record)).await
    }
}

#[async_trait]
impl RecordDeleter for GodaddyProvider {
    async fn delete_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        apply_in_order(records, |record| self.delete_record(zone, record)).await
    }
}

#[async_trait]
impl RecordSetter for GodaddyProvider {
    /// Replaces the upstream `(type, name)` record sets named in `records`.
    ///
    /// Lists the zone, deletes every existing record whose `(type, name)` matches
    /// an input record, then appends the input. One delete is issued per
    /// (desired, existing) match and each delete removes the whole set, so a pair
    /// that appears twice on either side is deleted twice and the repeat fails
    /// upstream.
    ///
    /// Not atomic. A failure while deleting leaves the zone with some sets
    /// removed and nothing appended (`completed` is empty); a failure while
    /// appending reports the records appended so far. Callers retry the whole
    /// call.
    async fn set_records(&self, zone: &str, records: &[Record]) -> BatchResult {
        let existing = self.get_records(zone).await?;

        for desired in records {
            for current in existing.iter().filter(|c| c.same_rrset(desired, zone)) {
                log::debug!("[{PROVIDER_NAME}] Replacing existing record: {current}");
                self.delete_record(zone, current).await?;
            }
        }

        self.append_records(zone, records).await
    }
}

impl DnsRecordProvider for GodaddyProvider {
    fn id(&self) -> &'static str {
        GODADDY_PROVIDER_ID
    }
}
