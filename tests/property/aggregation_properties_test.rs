//! Property-based tests for statistics rollups.
//!
//! Every grouping of a collection partitions it: the per-site, per-date and
//! per-category counts each sum to the total.

use std::collections::BTreeMap;

use parser_console::services::aggregator::{dashboard_stats, database_stats, rollup};
use parser_console::types::any::AnyRecord;
use parser_console::types::cookie::CookieRecord;
use parser_console::types::email::EmailRecord;
use parser_console::types::parsed::{ParseStatus, ParsedPageResult};
use parser_console::types::record::Category;
use proptest::prelude::*;
use serde_json::json;

fn arb_results() -> impl Strategy<Value = Vec<ParsedPageResult>> {
    prop::collection::vec(
        (
            prop_oneof![Just("site-a"), Just("site-b"), Just("site-c")],
            prop::collection::btree_set("[a-z]{1,6}", 0..4),
            any::<bool>(),
            500u32..2500,
        )
            .prop_map(|(site, keys, ok, ms)| {
                let data: BTreeMap<String, serde_json::Value> =
                    keys.into_iter().map(|k| (k, json!(1))).collect();
                let status = if ok { ParseStatus::Success } else { ParseStatus::Failed };
                ParsedPageResult::new(site, "https://example.com", data, status, ms)
            }),
        0..30,
    )
}

fn arb_mixed() -> impl Strategy<Value = Vec<AnyRecord>> {
    prop::collection::vec(
        (any::<bool>(), "[a-z]{1,5}", prop_oneof![Just("s1"), Just("s2")]).prop_map(
            |(is_email, name, source)| {
                if is_email {
                    AnyRecord::from(EmailRecord::new(&format!("{}@x.com", name), source, true, false))
                } else {
                    AnyRecord::from(CookieRecord::new(&name, "v", "x.com", source))
                }
            },
        ),
        0..30,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_database_stats_partition(results in arb_results()) {
        let stats = database_stats(&results);
        prop_assert_eq!(stats.total_records, results.len());
        prop_assert_eq!(stats.records_by_site.values().sum::<usize>(), results.len());
        prop_assert_eq!(stats.records_by_date.values().sum::<usize>(), results.len());

        let field_occurrences: usize = results.iter().map(|r| r.data.len()).sum();
        prop_assert_eq!(stats.records_by_type.values().sum::<usize>(), field_occurrences);
        prop_assert_eq!(stats.storage_used, serde_json::to_string(&results).unwrap().len());
    }

    #[test]
    fn prop_rollup_partition(records in arb_mixed()) {
        let out = rollup(&records);
        prop_assert_eq!(out.total, records.len());
        prop_assert_eq!(out.by_category.values().sum::<usize>(), records.len());
        prop_assert_eq!(out.by_source.values().sum::<usize>(), records.len());
        prop_assert_eq!(out.by_date.values().sum::<usize>(), records.len());
    }

    /// Shares add up to 100% whenever anything was counted, and are all zero
    /// otherwise.
    #[test]
    fn prop_dashboard_percentages(counts in prop::collection::vec(0usize..1000, 7)) {
        let pairs: Vec<(Category, usize)> = Category::HARVESTED
            .iter()
            .copied()
            .zip(counts.iter().copied())
            .collect();
        let stats = dashboard_stats(&pairs);
        let total: usize = counts.iter().sum();
        prop_assert_eq!(stats.total, total);

        let sum: f64 = stats.shares.iter().map(|s| s.percentage).sum();
        if total == 0 {
            prop_assert!(stats.shares.iter().all(|s| s.percentage == 0.0));
        } else {
            prop_assert!((sum - 100.0).abs() < 1e-6, "shares sum to {}", sum);
        }
    }
}
