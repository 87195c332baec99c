//! Category + free-text filter over catalog records.
//!
//! # Responsibility
//! - Reduce a record slice to the records matching a category label and a
//!   query string.
//!
//! # Invariants
//! - Output keeps input order; records are never re-sorted or mutated.
//! - The wildcard label matches every category; other labels match exactly
//!   and case-sensitively.
//! - Query matching is a case-insensitive substring test over the haystack;
//!   an empty query matches everything.
//! - Every input is valid. Unknown labels produce an empty result.

use crate::catalog::Catalog;
use crate::model::project::{ProjectId, ProjectRecord, ALL_CATEGORIES};

const HAYSTACK_SEPARATOR: &str = " ";

/// Returns the records matching `active_category` and `query`, in order.
pub fn filter<'a>(
    records: &'a [ProjectRecord],
    active_category: &str,
    query: &str,
) -> Vec<&'a ProjectRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_normalized(record, active_category, &needle))
        .collect()
}

/// Same as [`filter`], but keeps the stable ID of every matching record.
pub fn filter_entries<'a>(
    catalog: &'a Catalog,
    active_category: &str,
    query: &str,
) -> Vec<(ProjectId, &'a ProjectRecord)> {
    let needle = query.to_lowercase();
    catalog
        .entries()
        .filter(|(_, record)| matches_normalized(record, active_category, &needle))
        .collect()
}

/// Single-record form of the filter predicate.
pub fn matches(record: &ProjectRecord, active_category: &str, query: &str) -> bool {
    matches_normalized(record, active_category, &query.to_lowercase())
}

/// Builds the lower-cased searchable text for one record.
///
/// Field order: title, organization, category, tags, bullets.
pub fn haystack(record: &ProjectRecord) -> String {
    let fields = [
        record.title.as_str(),
        record.organization.as_str(),
        record.category.label(),
    ];
    fields
        .into_iter()
        .chain(record.tags.iter().map(String::as_str))
        .chain(record.bullets.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(HAYSTACK_SEPARATOR)
        .to_lowercase()
}

fn matches_category(record: &ProjectRecord, active_category: &str) -> bool {
    active_category == ALL_CATEGORIES || record.category.label() == active_category
}

fn matches_normalized(record: &ProjectRecord, active_category: &str, needle: &str) -> bool {
    if !matches_category(record, active_category) {
        return false;
    }
    // Skip building the haystack for the common empty-query case.
    needle.is_empty() || haystack(record).contains(needle)
}
