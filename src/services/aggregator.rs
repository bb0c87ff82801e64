//! Statistics over record collections.
//!
//! Every function here is a pure function of its input. Nothing is cached;
//! callers recompute after each mutation.

use std::collections::{BTreeMap, HashSet};

use chrono::{Local, Utc};

use crate::types::address::AddressRecord;
use crate::types::any::AnyRecord;
use crate::types::auth::{AuthKind, AuthRecord};
use crate::types::card::{CardNetwork, CardRecord};
use crate::types::cookie::CookieRecord;
use crate::types::dns::DnsEntry;
use crate::types::email::EmailRecord;
use crate::types::license::{LicenseRecord, LicenseType};
use crate::types::parsed::{ParseStatus, ParsedPageResult};
use crate::types::phone::{PhoneRecord, PhoneType};
use crate::types::proxy::{ProxyEndpoint, ProxyStatus};
use crate::types::record::Category;
use crate::types::site::SiteConfig;
use crate::types::stats::{
    AddressSummary, AuthSummary, CardSummary, CategoryShare, CookieSummary, DashboardStats,
    DatabaseStats, DnsSummary, EmailSummary, LicenseSummary, ParsedSummary, ParsingStats,
    PhoneSummary, ProxySummary, RecordRollup,
};

/// Local calendar date key used by the date rollups.
fn date_key(ts: chrono::DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format("%Y-%m-%d").to_string()
}

fn ratio(numerator: f64, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator / denominator as f64
    }
}

fn count_unique<'a, I: IntoIterator<Item = &'a str>>(values: I) -> usize {
    values.into_iter().collect::<HashSet<_>>().len()
}

/// Rollups over the parsed-result collection.
pub fn database_stats(results: &[ParsedPageResult]) -> DatabaseStats {
    let mut records_by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut records_by_site: BTreeMap<String, usize> = BTreeMap::new();
    let mut records_by_date: BTreeMap<String, usize> = BTreeMap::new();

    for result in results {
        for key in result.data.keys() {
            *records_by_type.entry(key.clone()).or_default() += 1;
        }
        *records_by_site.entry(result.site_id.clone()).or_default() += 1;
        *records_by_date.entry(date_key(result.timestamp)).or_default() += 1;
    }

    // Serializing plain structs with string keys cannot fail.
    let storage_used = serde_json::to_string(results).map(|s| s.len()).unwrap_or(0);

    DatabaseStats {
        total_records: results.len(),
        records_by_type,
        records_by_site,
        records_by_date,
        storage_used,
        last_update: Utc::now(),
    }
}

/// Category, source and date rollups over a mixed collection.
pub fn rollup(records: &[AnyRecord]) -> RecordRollup {
    let mut out = RecordRollup {
        total: records.len(),
        ..RecordRollup::default()
    };
    for record in records {
        *out.by_category.entry(record.category()).or_default() += 1;
        *out.by_source.entry(record.source().to_string()).or_default() += 1;
        *out.by_date.entry(date_key(record.created_at())).or_default() += 1;
    }
    out
}

/// Site and parse counters.
pub fn parsing_stats(sites: &[SiteConfig], results: &[ParsedPageResult]) -> ParsingStats {
    ParsingStats {
        total_sites: sites.len(),
        active_sites: sites.iter().filter(|s| s.is_active).count(),
        successful_parsing: results
            .iter()
            .filter(|r| r.status == ParseStatus::Success)
            .count(),
        failed_parsing: results
            .iter()
            .filter(|r| r.status == ParseStatus::Failed)
            .count(),
    }
}

/// Per-category counts and their share of the total, in input order.
pub fn dashboard_stats(counts: &[(Category, usize)]) -> DashboardStats {
    let total: usize = counts.iter().map(|(_, n)| n).sum();
    let shares = counts
        .iter()
        .map(|&(category, count)| CategoryShare {
            category,
            count,
            percentage: ratio(count as f64 * 100.0, total),
        })
        .collect();
    DashboardStats { shares, total }
}

/// Per-category summary counters.
pub trait Summarize: Sized {
    type Summary;

    fn summarize(records: &[Self]) -> Self::Summary;
}

/// Shorthand for `T::summarize(records)`.
pub fn summarize<T: Summarize>(records: &[T]) -> T::Summary {
    T::summarize(records)
}

impl Summarize for EmailRecord {
    type Summary = EmailSummary;

    fn summarize(records: &[Self]) -> EmailSummary {
        EmailSummary {
            total: records.len(),
            valid_count: records.iter().filter(|r| r.is_valid).count(),
            verified_count: records.iter().filter(|r| r.verified).count(),
            unique_domains: count_unique(records.iter().map(|r| r.domain.as_str())),
        }
    }
}

impl Summarize for CookieRecord {
    type Summary = CookieSummary;

    fn summarize(records: &[Self]) -> CookieSummary {
        CookieSummary {
            total: records.len(),
            secure_count: records.iter().filter(|r| r.secure).count(),
            http_only_count: records.iter().filter(|r| r.http_only).count(),
            unique_domains: count_unique(records.iter().map(|r| r.domain.as_str())),
        }
    }
}

impl Summarize for PhoneRecord {
    type Summary = PhoneSummary;

    fn summarize(records: &[Self]) -> PhoneSummary {
        PhoneSummary {
            total: records.len(),
            valid_count: records.iter().filter(|r| r.is_valid).count(),
            mobile_count: records
                .iter()
                .filter(|r| r.phone_type == PhoneType::Mobile)
                .count(),
            unique_countries: count_unique(records.iter().map(|r| r.country.as_str())),
        }
    }
}

impl Summarize for AuthRecord {
    type Summary = AuthSummary;

    fn summarize(records: &[Self]) -> AuthSummary {
        let of_kind = |kind: AuthKind| records.iter().filter(|r| r.kind == kind).count();
        AuthSummary {
            total: records.len(),
            password_count: of_kind(AuthKind::Password),
            token_count: of_kind(AuthKind::Token),
            login_count: of_kind(AuthKind::Login),
            unique_domains: count_unique(records.iter().map(|r| r.domain.as_str())),
        }
    }
}

impl Summarize for AddressRecord {
    type Summary = AddressSummary;

    fn summarize(records: &[Self]) -> AddressSummary {
        AddressSummary {
            total: records.len(),
            unique_countries: count_unique(records.iter().filter_map(|r| r.country.as_deref())),
            unique_cities: count_unique(records.iter().filter_map(|r| r.city.as_deref())),
            with_coordinates: records.iter().filter(|r| r.coordinates.is_some()).count(),
        }
    }
}

impl Summarize for CardRecord {
    type Summary = CardSummary;

    fn summarize(records: &[Self]) -> CardSummary {
        CardSummary {
            total: records.len(),
            valid_count: records.iter().filter(|r| r.is_valid).count(),
            visa_count: records
                .iter()
                .filter(|r| r.network == CardNetwork::Visa)
                .count(),
            mastercard_count: records
                .iter()
                .filter(|r| r.network == CardNetwork::Mastercard)
                .count(),
        }
    }
}

impl Summarize for LicenseRecord {
    type Summary = LicenseSummary;

    fn summarize(records: &[Self]) -> LicenseSummary {
        let now = Utc::now();
        LicenseSummary {
            total: records.len(),
            driver_count: records
                .iter()
                .filter(|r| r.license_type == LicenseType::Driver)
                .count(),
            business_count: records
                .iter()
                .filter(|r| r.license_type == LicenseType::Business)
                .count(),
            expired_count: records.iter().filter(|r| r.is_expired_at(now)).count(),
            unique_regions: count_unique(records.iter().filter_map(|r| r.region.as_deref())),
        }
    }
}

impl Summarize for ProxyEndpoint {
    type Summary = ProxySummary;

    fn summarize(records: &[Self]) -> ProxySummary {
        let total_ms: f64 = records.iter().map(|r| r.response_time_ms as f64).sum();
        ProxySummary {
            total: records.len(),
            active_count: records.iter().filter(|r| r.is_active).count(),
            working_count: records
                .iter()
                .filter(|r| r.status == ProxyStatus::Working)
                .count(),
            failed_count: records
                .iter()
                .filter(|r| r.status == ProxyStatus::Failed)
                .count(),
            avg_response_time_ms: ratio(total_ms, records.len()),
        }
    }
}

impl Summarize for DnsEntry {
    type Summary = DnsSummary;

    fn summarize(records: &[Self]) -> DnsSummary {
        let total_ms: f64 = records.iter().map(|r| r.response_time_ms as f64).sum();
        let total_reliability: f64 = records.iter().map(|r| r.reliability as f64).sum();
        DnsSummary {
            total: records.len(),
            active_count: records.iter().filter(|r| r.is_active).count(),
            avg_response_time_ms: ratio(total_ms, records.len()),
            avg_reliability: ratio(total_reliability, records.len()),
        }
    }
}

impl Summarize for ParsedPageResult {
    type Summary = ParsedSummary;

    fn summarize(records: &[Self]) -> ParsedSummary {
        let of_status = |status: ParseStatus| records.iter().filter(|r| r.status == status).count();
        let total_ms: f64 = records.iter().map(|r| r.processing_time_ms as f64).sum();
        ParsedSummary {
            total: records.len(),
            success_count: of_status(ParseStatus::Success),
            partial_count: of_status(ParseStatus::Partial),
            failed_count: of_status(ParseStatus::Failed),
            avg_processing_time_ms: ratio(total_ms, records.len()),
        }
    }
}
