//! Search and filter over record collections.
//!
//! One generic engine drives every category through the `Searchable` field
//! accessors, including mixed `AnyRecord` collections.

use std::collections::BTreeSet;

use log::debug;

use crate::types::query::Query;
use crate::types::record::Searchable;

/// Whether `record` passes `query`.
///
/// The search term must be a case-insensitive substring of at least one
/// searchable field, and every non-blank constraint must equal the record's
/// field value. A field the record lacks fails its predicate.
pub fn matches<T: Searchable>(record: &T, query: &Query) -> bool {
    if let Some(term) = query.active_search() {
        let hit = record.searchable_fields().iter().any(|name| {
            record
                .field(name)
                .map(|v| v.to_string().to_lowercase().contains(&term))
                .unwrap_or(false)
        });
        if !hit {
            return false;
        }
    }

    query.active_constraints().all(|(name, expected)| {
        record
            .field(name)
            .map(|actual| actual.matches(expected))
            .unwrap_or(false)
    })
}

/// Records passing `query`, in their original order.
pub fn filter<T: Searchable + Clone>(records: &[T], query: &Query) -> Vec<T> {
    if query.is_empty() {
        return records.to_vec();
    }
    let out: Vec<T> = records
        .iter()
        .filter(|r| matches(*r, query))
        .cloned()
        .collect();
    debug!("Filter kept {} of {} records", out.len(), records.len());
    out
}

/// Number of records passing `query`.
pub fn count<T: Searchable>(records: &[T], query: &Query) -> usize {
    records.iter().filter(|r| matches(*r, query)).count()
}

/// Sorted distinct rendered values of `field`. Records without the field
/// are skipped.
pub fn distinct_values<T: Searchable>(records: &[T], field: &str) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.field(field))
        .map(|v| v.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
