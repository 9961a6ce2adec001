//! Filtering: keep the records that pass every active criterion.

use crate::criteria::Criteria;
use crate::record::Reviewable;

/// Case-insensitive substring match of `term` against any of `fields`.
/// An empty term matches everything.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Records passing `criteria`, in input order. The input is not modified.
pub fn filter<R: Reviewable>(records: &[R], criteria: &R::Criteria) -> Vec<R> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}
