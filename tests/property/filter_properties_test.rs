//! Property-based tests for record filtering.
//!
//! An empty query keeps every record in order, filtering twice with the same
//! query changes nothing, and `count` always agrees with `filter`.

use parser_console::services::query_engine::{count, filter, matches};
use parser_console::types::email::EmailRecord;
use parser_console::types::query::Query;
use proptest::prelude::*;

/// Strategy for generating small email collections over a handful of domains
/// so that domain constraints hit some records and miss others.
fn arb_emails() -> impl Strategy<Value = Vec<EmailRecord>> {
    prop::collection::vec(
        (
            "[a-z]{1,8}",
            prop_oneof![Just("x.com"), Just("y.org"), Just("z.net")],
            any::<bool>(),
            any::<bool>(),
        )
            .prop_map(|(local, domain, valid, verified)| {
                EmailRecord::new(&format!("{}@{}", local, domain), "site", valid, verified)
            }),
        0..20,
    )
}

/// Strategy for queries mixing a search term, a domain and a validity flag,
/// each of which may be absent or blank.
fn arb_query() -> impl Strategy<Value = Query> {
    (
        proptest::option::of("[a-zA-Z@. ]{0,4}"),
        proptest::option::of(prop_oneof![Just("x.com"), Just("y.org"), Just("")]),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(search, domain, valid)| {
            let mut query = Query::new();
            if let Some(term) = search {
                query = query.search(&term);
            }
            if let Some(domain) = domain {
                query = query.constraint("domain", domain);
            }
            if let Some(valid) = valid {
                query = query.constraint("is_valid", valid);
            }
            query
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_empty_query_is_identity(records in arb_emails()) {
        prop_assert_eq!(filter(&records, &Query::new()), records);
    }

    #[test]
    fn prop_filter_is_idempotent(records in arb_emails(), query in arb_query()) {
        let once = filter(&records, &query);
        let twice = filter(&once, &query);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_count_matches_filter(records in arb_emails(), query in arb_query()) {
        let hits = filter(&records, &query);
        prop_assert_eq!(count(&records, &query), hits.len());
        prop_assert!(hits.iter().all(|r| matches(r, &query)));
    }

    /// Filtering keeps the relative order of the surviving records.
    #[test]
    fn prop_filter_preserves_order(records in arb_emails(), query in arb_query()) {
        let hits = filter(&records, &query);
        let expected: Vec<&str> = records
            .iter()
            .filter(|r| matches(*r, &query))
            .map(|r| r.id.as_str())
            .collect();
        let actual: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }
}
