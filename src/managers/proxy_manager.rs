use chrono::Utc;
use log::{debug, info};

use crate::managers::record_store::{RecordStore, RecordStoreTrait};
use crate::services::validator::Validator;
use crate::types::errors::StoreError;
use crate::types::proxy::{ProxyEndpoint, ProxyStatus};

/// Trait defining the proxy management interface.
pub trait ProxyManagerTrait {
    fn add_proxy(&mut self, proxy: ProxyEndpoint) -> Result<String, StoreError>;
    fn remove_proxy(&mut self, id: &str) -> Result<(), StoreError>;
    fn toggle_proxy(&mut self, id: &str) -> Result<bool, StoreError>;
    fn check_proxy(&mut self, id: &str, validator: &mut dyn Validator) -> Result<ProxyStatus, StoreError>;
    fn check_all(&mut self, validator: &mut dyn Validator) -> usize;
    fn active_proxies(&self) -> Vec<&ProxyEndpoint>;
}

/// In-memory proxy list.
pub struct ProxyManager {
    store: RecordStore<ProxyEndpoint>,
}

impl ProxyManager {
    pub fn new() -> Self {
        Self {
            store: RecordStore::new(),
        }
    }

    pub fn store(&self) -> &RecordStore<ProxyEndpoint> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut RecordStore<ProxyEndpoint> {
        &mut self.store
    }
}

impl Default for ProxyManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProxyManagerTrait for ProxyManager {
    fn add_proxy(&mut self, proxy: ProxyEndpoint) -> Result<String, StoreError> {
        info!("Adding proxy {}", proxy.address());
        self.store.add(proxy)
    }

    fn remove_proxy(&mut self, id: &str) -> Result<(), StoreError> {
        self.store.remove(id).map(|_| ())
    }

    /// Flips the active flag. Returns the new state.
    fn toggle_proxy(&mut self, id: &str) -> Result<bool, StoreError> {
        self.store.toggle_active(id)
    }

    /// Runs the validator against one proxy and stamps status, response
    /// time and check time onto it.
    fn check_proxy(&mut self, id: &str, validator: &mut dyn Validator) -> Result<ProxyStatus, StoreError> {
        let proxy = self
            .store
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        let check = validator.check_proxy(proxy);
        let status = if check.working {
            ProxyStatus::Working
        } else {
            ProxyStatus::Failed
        };

        self.store.update(id, |p| {
            p.status = status;
            p.response_time_ms = check.response_time_ms;
            p.last_checked = Utc::now();
        })?;
        debug!("Proxy {} checked: {}", id, status.as_str());
        Ok(status)
    }

    /// Checks every proxy. Returns how many are working.
    fn check_all(&mut self, validator: &mut dyn Validator) -> usize {
        let ids: Vec<String> = self.store.list().iter().map(|p| p.id.clone()).collect();
        let mut working = 0;
        for id in &ids {
            if let Ok(ProxyStatus::Working) = self.check_proxy(id, &mut *validator) {
                working += 1;
            }
        }
        info!("Checked {} proxies, {} working", ids.len(), working);
        working
    }

    fn active_proxies(&self) -> Vec<&ProxyEndpoint> {
        self.store.active()
    }
}
