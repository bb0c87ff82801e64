use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::Category;

/// Rollups over the parsed-result collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DatabaseStats {
    pub total_records: usize,
    /// Payload field name → number of records containing it.
    pub records_by_type: BTreeMap<String, usize>,
    pub records_by_site: BTreeMap<String, usize>,
    /// Local calendar date (`YYYY-MM-DD`) → count.
    pub records_by_date: BTreeMap<String, usize>,
    /// Byte length of the compact JSON serialization of the collection.
    pub storage_used: usize,
    pub last_update: DateTime<Utc>,
}

/// Rollups over a mixed-category collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecordRollup {
    pub total: usize,
    pub by_category: BTreeMap<Category, usize>,
    pub by_source: BTreeMap<String, usize>,
    pub by_date: BTreeMap<String, usize>,
}

/// Site/parse counters shown on the control panel header.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ParsingStats {
    pub total_sites: usize,
    pub active_sites: usize,
    pub successful_parsing: usize,
    pub failed_parsing: usize,
}

/// One category's slice of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub count: usize,
    pub percentage: f64,
}

/// Cross-category dashboard counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DashboardStats {
    pub shares: Vec<CategoryShare>,
    pub total: usize,
}

impl DashboardStats {
    pub fn count(&self, category: Category) -> usize {
        self.shares
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.count)
            .unwrap_or(0)
    }

    pub fn percentage(&self, category: Category) -> f64 {
        self.shares
            .iter()
            .find(|s| s.category == category)
            .map(|s| s.percentage)
            .unwrap_or(0.0)
    }
}

// === Per-category summaries ===

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct EmailSummary {
    pub total: usize,
    pub valid_count: usize,
    pub verified_count: usize,
    pub unique_domains: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CookieSummary {
    pub total: usize,
    pub secure_count: usize,
    pub http_only_count: usize,
    pub unique_domains: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PhoneSummary {
    pub total: usize,
    pub valid_count: usize,
    pub mobile_count: usize,
    pub unique_countries: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AuthSummary {
    pub total: usize,
    pub password_count: usize,
    pub token_count: usize,
    pub login_count: usize,
    pub unique_domains: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AddressSummary {
    pub total: usize,
    pub unique_countries: usize,
    pub unique_cities: usize,
    pub with_coordinates: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CardSummary {
    pub total: usize,
    pub valid_count: usize,
    pub visa_count: usize,
    pub mastercard_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LicenseSummary {
    pub total: usize,
    pub driver_count: usize,
    pub business_count: usize,
    pub expired_count: usize,
    pub unique_regions: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProxySummary {
    pub total: usize,
    pub active_count: usize,
    pub working_count: usize,
    pub failed_count: usize,
    pub avg_response_time_ms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DnsSummary {
    pub total: usize,
    pub active_count: usize,
    pub avg_response_time_ms: f64,
    pub avg_reliability: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ParsedSummary {
    pub total: usize,
    pub success_count: usize,
    pub partial_count: usize,
    pub failed_count: usize,
    pub avg_processing_time_ms: f64,
}
