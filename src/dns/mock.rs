//! In-memory provider shared by unit tests.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::{
    ChangeAction, ChangeConfirmation, DnsProvider, ProviderError, RecordChangeBatch, RecordType,
    fqdn,
};

type RecordKey = (String, String, RecordType);

/// Provider backed by a map of `(zone, fqdn, type) -> value`.
#[derive(Debug, Default)]
pub struct MockProvider {
    records: Mutex<BTreeMap<RecordKey, String>>,
    batches: Mutex<Vec<(String, RecordChangeBatch)>>,
    query_calls: AtomicUsize,
    change_calls: AtomicUsize,
    fail_queries: AtomicBool,
    reject_changes: AtomicBool,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a provider whose zone already publishes `value` for `hostname`.
    pub fn with_a_record(zone_id: &str, hostname: &str, value: &str) -> Self {
        let provider = Self::new();
        provider.records.lock().unwrap().insert(
            (zone_id.to_string(), fqdn(hostname), RecordType::A),
            value.to_string(),
        );
        provider
    }

    pub fn failing_queries() -> Self {
        let provider = Self::new();
        provider.fail_queries.store(true, Ordering::SeqCst);
        provider
    }

    pub fn rejecting_changes() -> Self {
        let provider = Self::new();
        provider.reject_changes.store(true, Ordering::SeqCst);
        provider
    }

    pub fn record(&self, zone_id: &str, hostname: &str, record_type: RecordType) -> Option<String> {
        self.records
            .lock()
            .unwrap()
            .get(&(zone_id.to_string(), fqdn(hostname), record_type))
            .cloned()
    }

    pub fn query_calls(&self) -> usize {
        self.query_calls.load(Ordering::SeqCst)
    }

    pub fn change_calls(&self) -> usize {
        self.change_calls.load(Ordering::SeqCst)
    }

    pub fn submitted_batches(&self) -> Vec<(String, RecordChangeBatch)> {
        self.batches.lock().unwrap().clone()
    }
}

impl DnsProvider for MockProvider {
    async fn test_dns_answer(
        &self,
        zone_id: &str,
        record_name: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, ProviderError> {
        self.query_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_queries.load(Ordering::SeqCst) {
            return Err(ProviderError::Api("connection reset".to_string()));
        }

        Ok(self
            .record(zone_id, record_name, record_type)
            .into_iter()
            .collect())
    }

    async fn change_resource_record_sets(
        &self,
        zone_id: &str,
        batch: &RecordChangeBatch,
    ) -> Result<ChangeConfirmation, ProviderError> {
        let call = self.change_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.reject_changes.load(Ordering::SeqCst) {
            return Err(ProviderError::Api("InvalidChangeBatch".to_string()));
        }

        self.batches
            .lock()
            .unwrap()
            .push((zone_id.to_string(), batch.clone()));

        let mut records = self.records.lock().unwrap();
        for change in &batch.changes {
            match change.action {
                ChangeAction::Upsert => {
                    records.insert(
                        (zone_id.to_string(), change.name.clone(), change.record_type),
                        change.value.clone(),
                    );
                }
            }
        }

        Ok(ChangeConfirmation {
            detail: format!("change-{call} PENDING"),
        })
    }
}
