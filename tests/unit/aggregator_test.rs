use std::collections::BTreeMap;

use chrono::{Duration, Local, TimeZone, Utc};
use rstest::rstest;
use serde_json::json;

use parser_console::services::aggregator::{
    dashboard_stats, database_stats, parsing_stats, rollup, summarize,
};
use parser_console::types::address::{AddressRecord, GeoPoint};
use parser_console::types::any::AnyRecord;
use parser_console::types::auth::{AuthKind, AuthRecord};
use parser_console::types::card::{CardNetwork, CardRecord};
use parser_console::types::cookie::CookieRecord;
use parser_console::types::dns::DnsEntry;
use parser_console::types::email::EmailRecord;
use parser_console::types::license::{LicenseRecord, LicenseType};
use parser_console::types::parsed::{ParseStatus, ParsedPageResult};
use parser_console::types::phone::{PhoneRecord, PhoneType};
use parser_console::types::proxy::{ProxyEndpoint, ProxyProtocol, ProxyStatus};
use parser_console::types::record::Category;
use parser_console::types::site::SiteConfig;

fn parsed(site_id: &str, keys: &[&str], status: ParseStatus, ms: u32) -> ParsedPageResult {
    let data: BTreeMap<String, serde_json::Value> =
        keys.iter().map(|k| (k.to_string(), json!(1))).collect();
    ParsedPageResult::new(site_id, "https://example.com", data, status, ms)
}

#[test]
fn test_database_stats_empty() {
    let stats = database_stats(&[]);
    assert_eq!(stats.total_records, 0);
    assert!(stats.records_by_type.is_empty());
    assert!(stats.records_by_site.is_empty());
    assert!(stats.records_by_date.is_empty());
    assert_eq!(stats.storage_used, "[]".len());
}

#[test]
fn test_database_stats_counts() {
    let results = vec![
        parsed("s1", &["title", "links"], ParseStatus::Success, 600),
        parsed("s1", &["title"], ParseStatus::Failed, 700),
        parsed("s2", &["title", "images"], ParseStatus::Success, 800),
    ];
    let stats = database_stats(&results);

    assert_eq!(stats.total_records, 3);
    assert_eq!(stats.records_by_type["title"], 3);
    assert_eq!(stats.records_by_type["links"], 1);
    assert_eq!(stats.records_by_type["images"], 1);
    assert_eq!(stats.records_by_site["s1"], 2);
    assert_eq!(stats.records_by_site["s2"], 1);
    assert_eq!(stats.records_by_date.values().sum::<usize>(), 3);
    assert_eq!(
        stats.storage_used,
        serde_json::to_string(&results).unwrap().len()
    );
}

#[test]
fn test_database_stats_groups_by_local_date() {
    let mut a = parsed("s1", &["title"], ParseStatus::Success, 600);
    let mut b = parsed("s1", &["title"], ParseStatus::Success, 600);
    let day = Local.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
    a.timestamp = day.with_timezone(&Utc);
    b.timestamp = (day - Duration::days(1)).with_timezone(&Utc);

    let stats = database_stats(&[a, b]);
    assert_eq!(stats.records_by_date["2024-03-10"], 1);
    assert_eq!(stats.records_by_date["2024-03-09"], 1);
}

#[test]
fn test_email_summary_scenario() {
    let emails = vec![
        EmailRecord::new("a@x.com", "s", true, true),
        EmailRecord::new("b@x.com", "s", false, false),
        EmailRecord::new("c@y.com", "s", true, false),
    ];
    let summary = summarize(&emails);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.valid_count, 2);
    assert_eq!(summary.verified_count, 1);
    assert_eq!(summary.unique_domains, 2);
}

#[test]
fn test_cookie_summary() {
    let mut secure = CookieRecord::new("a", "1", "x.com", "s");
    secure.secure = true;
    secure.http_only = true;
    let plain = CookieRecord::new("b", "2", "y.com", "s");

    let summary = summarize(&[secure, plain]);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.secure_count, 1);
    assert_eq!(summary.http_only_count, 1);
    assert_eq!(summary.unique_domains, 2);
}

#[test]
fn test_phone_summary() {
    let phones = vec![
        PhoneRecord::new("+1 555 0100", "USA", PhoneType::Mobile, true, "s"),
        PhoneRecord::new("+1 555 0101", "USA", PhoneType::Landline, false, "s"),
        PhoneRecord::new("+7 999 000", "Russia", PhoneType::Mobile, true, "s"),
    ];
    let summary = summarize(&phones);
    assert_eq!(summary.valid_count, 2);
    assert_eq!(summary.mobile_count, 2);
    assert_eq!(summary.unique_countries, 2);
}

#[test]
fn test_auth_summary() {
    let records = vec![
        AuthRecord::new(AuthKind::Password, "hunter2", "x.com", "s"),
        AuthRecord::new(AuthKind::Password, "letmein", "x.com", "s"),
        AuthRecord::new(AuthKind::Token, "tok", "y.com", "s"),
        AuthRecord::new(AuthKind::Login, "admin", "z.com", "s"),
    ];
    let summary = summarize(&records);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.password_count, 2);
    assert_eq!(summary.token_count, 1);
    assert_eq!(summary.login_count, 1);
    assert_eq!(summary.unique_domains, 3);
}

#[test]
fn test_address_summary_skips_unset_fields() {
    let mut full = AddressRecord::new("1 Main St, Springfield, USA", "s");
    full.city = Some("Springfield".to_string());
    full.country = Some("USA".to_string());
    full.coordinates = Some(GeoPoint { lat: 1.0, lng: 2.0 });
    let bare = AddressRecord::new("somewhere", "s");

    let summary = summarize(&[full, bare]);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.unique_countries, 1);
    assert_eq!(summary.unique_cities, 1);
    assert_eq!(summary.with_coordinates, 1);
}

#[test]
fn test_card_summary() {
    let cards = vec![
        CardRecord::new("**** 1111", CardNetwork::Visa, true, "s"),
        CardRecord::new("**** 2222", CardNetwork::Mastercard, false, "s"),
        CardRecord::new("**** 3333", CardNetwork::Amex, true, "s"),
    ];
    let summary = summarize(&cards);
    assert_eq!(summary.valid_count, 2);
    assert_eq!(summary.visa_count, 1);
    assert_eq!(summary.mastercard_count, 1);
}

#[test]
fn test_license_summary_counts_expired() {
    let mut expired = LicenseRecord::new("D-1", LicenseType::Driver, "s");
    expired.expiry = Some(Utc::now() - Duration::days(1));
    expired.region = Some("CA".to_string());
    let mut valid = LicenseRecord::new("B-1", LicenseType::Business, "s");
    valid.expiry = Some(Utc::now() + Duration::days(365));
    valid.region = Some("NY".to_string());
    let undated = LicenseRecord::new("D-2", LicenseType::Driver, "s");

    let summary = summarize(&[expired, valid, undated]);
    assert_eq!(summary.driver_count, 2);
    assert_eq!(summary.business_count, 1);
    assert_eq!(summary.expired_count, 1);
    assert_eq!(summary.unique_regions, 2);
}

#[test]
fn test_proxy_summary_average() {
    let mut a = ProxyEndpoint::new("10.0.0.1", 80, ProxyProtocol::Http);
    a.status = ProxyStatus::Working;
    a.response_time_ms = 100;
    let mut b = ProxyEndpoint::new("10.0.0.2", 80, ProxyProtocol::Http);
    b.status = ProxyStatus::Failed;
    b.response_time_ms = 300;
    b.is_active = false;

    let summary = summarize(&[a, b]);
    assert_eq!(summary.total, 2);
    assert_eq!(summary.active_count, 1);
    assert_eq!(summary.working_count, 1);
    assert_eq!(summary.failed_count, 1);
    assert_eq!(summary.avg_response_time_ms, 200.0);
}

#[test]
fn test_dns_summary_empty_is_zero() {
    let summary = summarize::<DnsEntry>(&[]);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.avg_response_time_ms, 0.0);
    assert_eq!(summary.avg_reliability, 0.0);
}

#[test]
fn test_parsed_summary() {
    let results = vec![
        parsed("s1", &["title"], ParseStatus::Success, 1000),
        parsed("s1", &["title"], ParseStatus::Partial, 2000),
        parsed("s2", &["title"], ParseStatus::Failed, 600),
    ];
    let summary = summarize(&results);
    assert_eq!(summary.success_count, 1);
    assert_eq!(summary.partial_count, 1);
    assert_eq!(summary.failed_count, 1);
    assert_eq!(summary.avg_processing_time_ms, 1200.0);
}

#[test]
fn test_parsing_stats() {
    let mut inactive = SiteConfig::new("B", "https://b.com");
    inactive.is_active = false;
    let sites = vec![SiteConfig::new("A", "https://a.com"), inactive];
    let results = vec![
        parsed("s1", &[], ParseStatus::Success, 500),
        parsed("s1", &[], ParseStatus::Success, 500),
        parsed("s1", &[], ParseStatus::Partial, 500),
        parsed("s1", &[], ParseStatus::Failed, 500),
    ];

    let stats = parsing_stats(&sites, &results);
    assert_eq!(stats.total_sites, 2);
    assert_eq!(stats.active_sites, 1);
    assert_eq!(stats.successful_parsing, 2);
    assert_eq!(stats.failed_parsing, 1);
}

#[rstest]
#[case(&[(Category::Email, 1), (Category::Cookie, 3)], 4, &[25.0, 75.0])]
#[case(&[(Category::Email, 2), (Category::Phone, 2)], 4, &[50.0, 50.0])]
#[case(&[(Category::Email, 0), (Category::Phone, 0)], 0, &[0.0, 0.0])]
fn test_dashboard_percentages(
    #[case] counts: &[(Category, usize)],
    #[case] total: usize,
    #[case] expected: &[f64],
) {
    let stats = dashboard_stats(counts);
    assert_eq!(stats.total, total);
    let got: Vec<f64> = stats.shares.iter().map(|s| s.percentage).collect();
    assert_eq!(got, expected);
}

#[test]
fn test_dashboard_lookup_helpers() {
    let stats = dashboard_stats(&[(Category::Email, 1), (Category::Cookie, 1)]);
    assert_eq!(stats.count(Category::Email), 1);
    assert_eq!(stats.percentage(Category::Cookie), 50.0);
    assert_eq!(stats.count(Category::License), 0);
}

#[test]
fn test_rollup_mixed_collection() {
    let records: Vec<AnyRecord> = vec![
        EmailRecord::new("a@x.com", "site1.com", true, true).into(),
        EmailRecord::new("b@x.com", "site2.com", true, true).into(),
        CookieRecord::new("sid", "1", "x.com", "site1.com").into(),
    ];
    let out = rollup(&records);
    assert_eq!(out.total, 3);
    assert_eq!(out.by_category[&Category::Email], 2);
    assert_eq!(out.by_category[&Category::Cookie], 1);
    assert_eq!(out.by_source["site1.com"], 2);
    assert_eq!(out.by_date.values().sum::<usize>(), 3);
}
