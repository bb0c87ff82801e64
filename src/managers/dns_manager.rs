use log::{debug, info, warn};

use crate::managers::record_store::{RecordStore, RecordStoreTrait};
use crate::services::validator::{DnsCheck, Validator};
use crate::types::dns::DnsEntry;
use crate::types::errors::StoreError;

/// Trait defining the DNS resolver management interface.
pub trait DnsManagerTrait {
    fn add_dns(&mut self, entry: DnsEntry) -> Result<String, StoreError>;
    fn remove_dns(&mut self, id: &str) -> Result<(), StoreError>;
    fn toggle_dns(&mut self, id: &str) -> Result<bool, StoreError>;
    fn check_dns(&mut self, id: &str, validator: &mut dyn Validator) -> Result<DnsCheck, StoreError>;
    fn active_dns(&self) -> Vec<&DnsEntry>;
}

/// In-memory list of DNS resolvers.
pub struct DnsManager {
    store: RecordStore<DnsEntry>,
}

impl DnsManager {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
        }
    }

    /// Manager pre-filled with the Google and Cloudflare public resolvers.
    /// Google starts active, Cloudflare inactive.
    pub fn with_defaults() -> Self {
        let mut google = DnsEntry::new("Google DNS", "8.8.8.8", Some("8.8.4.4"), "Google");
        google.response_time_ms = 15;
        google.reliability = 99;

        let mut cloudflare = DnsEntry::new("Cloudflare DNS", "1.1.1.1", Some("1.0.0.1"), "Cloudflare");
        cloudflare.is_active = false;
        cloudflare.response_time_ms = 12;
        cloudflare.reliability = 98;

        let store = RecordStore::from_records(vec![google, cloudflare]).unwrap_or_else(|e| {
            warn!("Default DNS resolvers rejected: {}", e);
            RecordStore::new()
        });
        Self { store }
    }

    pub fn store(&self) -> &RecordStore<DnsEntry> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore<DnsEntry> {
        &mut self.store
    }
}

impl Default for DnsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl DnsManagerTrait for DnsManager {
    fn add_dns(&mut self, entry: DnsEntry) -> Result<String, StoreError> {
        info!("Adding DNS resolver {} ({})", entry.name, entry.primary);
        self.store.add(entry)
    }

    fn remove_dns(&mut self, id: &str) -> Result<(), StoreError> {
        self.store.remove(id).map(|_| ())
    }

    fn toggle_dns(&mut self, id: &str) -> Result<bool, StoreError> {
        self.store.toggle_active(id)
    }

    /// Measures one resolver and stamps response time and reliability.
    fn check_dns(&mut self, id: &str, validator: &mut dyn Validator) -> Result<DnsCheck, StoreError> {
        let entry = self
            .store
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let check = validator.check_dns(entry);

        self.store.update(id, |e| {
            e.response_time_ms = check.response_time_ms;
            e.reliability = check.reliability.min(100);
        })?;
        debug!(
            "DNS {} checked: {} ms, {}%",
            id, check.response_time_ms, check.reliability
        );
        Ok(check)
    }

    fn active_dns(&self) -> Vec<&DnsEntry> {
        self.store.active()
    }
}
