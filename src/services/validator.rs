//! Liveness checks for proxies and DNS resolvers.
//!
//! The engine does not talk to the network. A `Validator` supplies the
//! measured values and the managers stamp them onto records.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::dns::DnsEntry;
use crate::types::proxy::ProxyEndpoint;

/// Outcome of checking one proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProxyCheck {
    pub working: bool,
    pub response_time_ms: u32,
}

/// Outcome of checking one DNS resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DnsCheck {
    pub response_time_ms: u32,
    /// Percentage, 0–100.
    pub reliability: u32,
}

/// Source of proxy and DNS measurements.
pub trait Validator: Send {
    fn check_proxy(&mut self, proxy: &ProxyEndpoint) -> ProxyCheck;
    fn check_dns(&mut self, entry: &DnsEntry) -> DnsCheck;
}

/// Simulated validator producing plausible random measurements.
pub struct RandomValidator {
    rng: StdRng,
    working_rate: f64,
}

impl RandomValidator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            working_rate: 0.7,
        }
    }

    /// Deterministic validator for tests and demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            working_rate: 0.7,
        }
    }

    /// Overrides the probability that a proxy check reports "working".
    pub fn with_working_rate(mut self, rate: f64) -> Self {
        self.working_rate = rate.clamp(0.0, 1.0);
        self
    }
}

impl Default for RandomValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RandomValidator {
    fn check_proxy(&mut self, _proxy: &ProxyEndpoint) -> ProxyCheck {
        ProxyCheck {
            working: self.rng.random_bool(self.working_rate),
            response_time_ms: self.rng.random_range(50..1050),
        }
    }

    fn check_dns(&mut self, _entry: &DnsEntry) -> DnsCheck {
        DnsCheck {
            response_time_ms: self.rng.random_range(10..110),
            reliability: self.rng.random_range(80..100),
        }
    }
}
