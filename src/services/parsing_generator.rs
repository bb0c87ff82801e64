//! Simulated parsing loop.
//!
//! While running, a tokio task produces one `ParsedPageResult` per tick for
//! a random active site and commits it to the shared result store, newest
//! first. The task is owned by `ParsingGenerator`, cancelled by `stop` and
//! on drop.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use crate::managers::record_store::{RecordStore, RecordStoreTrait};
use crate::managers::site_manager::{SiteManager, SiteManagerTrait};
use crate::types::errors::GeneratorError;
use crate::types::parsed::{ParseStatus, ParsedPageResult};
use crate::types::settings::GeneratorSettings;
use crate::types::site::SiteConfig;

pub type SharedSites = Arc<Mutex<SiteManager>>;
pub type SharedResults = Arc<Mutex<RecordStore<ParsedPageResult>>>;

/// Locks `mutex`, recovering the data if a previous holder panicked.
pub(crate) fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Builds one simulated result for `site`.
pub fn generate_result<R: Rng>(rng: &mut R, site: &SiteConfig, success_rate: f64) -> ParsedPageResult {
    let mut data = BTreeMap::new();
    data.insert("title".to_string(), json!(format!("Page title from {}", site.name)));
    data.insert("links".to_string(), json!(rng.random_range(1..=50)));
    data.insert("images".to_string(), json!(rng.random_range(1..=20)));
    data.insert(
        "text".to_string(),
        json!(format!("Extracted text content from {}", site.url)),
    );

    let status = if rng.random_bool(success_rate.clamp(0.0, 1.0)) {
        ParseStatus::Success
    } else {
        ParseStatus::Failed
    };
    let processing_time_ms = rng.random_range(500..2500);

    let mut result = ParsedPageResult::new(&site.id, &site.url, data, status, processing_time_ms);
    if status == ParseStatus::Failed {
        result.errors = Some(vec![format!("Failed to parse {}", site.url)]);
    }
    result
}

/// One tick: picks a uniformly random active site and commits a result for
/// it. Returns the committed result's ID, or `None` when no site is active.
pub fn generate_once<R: Rng>(
    rng: &mut R,
    sites: &SharedSites,
    results: &SharedResults,
    success_rate: f64,
) -> Option<String> {
    let site = {
        let sites = lock_or_recover(sites);
        let active = sites.active_sites();
        if active.is_empty() {
            return None;
        }
        active[rng.random_range(0..active.len())].clone()
    };

    let result = generate_result(rng, &site, success_rate);

    let mut store = lock_or_recover(results);
    match store.insert_first(result) {
        Ok(id) => {
            debug!("Generated parsed result {} for site {}", id, site.name);
            Some(id)
        }
        Err(e) => {
            warn!("Dropped generated result: {}", e);
            None
        }
    }
}

/// Owner of the background generation task.
pub struct ParsingGenerator {
    interval: Duration,
    success_rate: f64,
    seed: Option<u64>,
    handle: Option<JoinHandle<()>>,
}

impl ParsingGenerator {
    pub fn new(settings: &GeneratorSettings) -> Self {
        Self {
            interval: Duration::from_secs(settings.interval_secs.max(1)),
            success_rate: settings.success_rate,
            seed: None,
            handle: None,
        }
    }

    /// Uses a deterministic random source for the next `start`.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Spawns the generation task on the current tokio runtime.
    ///
    /// Returns `Ok(false)` without doing anything when already running.
    pub fn start(&mut self, sites: SharedSites, results: SharedResults) -> Result<bool, GeneratorError> {
        if self.is_running() {
            warn!("Parsing generator already running");
            return Ok(false);
        }
        let runtime = Handle::try_current().map_err(|_| GeneratorError::NoRuntime)?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let period = self.interval;
        let success_rate = self.success_rate;

        self.handle = Some(runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                generate_once(&mut rng, &sites, &results, success_rate);
            }
        }));
        info!("Parsing generator started (every {:?})", period);
        Ok(true)
    }

    /// Cancels the task. Returns `false` if it was not running.
    pub fn stop(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.abort();
                info!("Parsing generator stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

impl Drop for ParsingGenerator {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
