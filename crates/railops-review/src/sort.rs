//! Stable, typed sorting of record collections.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use railops_core::enums::SortDirection;

use crate::criteria::label;
use crate::record::Reviewable;

/// A record's value in one sort column.
///
/// Values of one column always share a variant, apart from `Absent`,
/// which orders before everything else.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Absent,
    Number(f64),
    Text(&'a str),
    /// Serialized label of an enum value, compared as text.
    Label(String),
}

impl SortValue<'_> {
    pub fn label<T: Serialize>(value: &T) -> Self {
        SortValue::Label(label(value))
    }

    fn variant_order(&self) -> u8 {
        match self {
            SortValue::Absent => 0,
            SortValue::Number(_) => 1,
            SortValue::Text(_) | SortValue::Label(_) => 2,
        }
    }

    /// Total order over sort values.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Label(a), SortValue::Label(b)) => a.cmp(b),
            _ => self.variant_order().cmp(&other.variant_order()),
        }
    }
}

/// Sortable columns of the train movements table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrainSortKey {
    TrainNumber,
    TrainName,
    #[serde(rename = "type")]
    TrainType,
    Status,
    Origin,
    Destination,
    Departure,
    Arrival,
    CurrentLocation,
    Delay,
    Passengers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecommendationSortKey {
    Title,
    Category,
    Priority,
    Confidence,
    TimeReduction,
    Status,
    Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IncidentSortKey {
    Title,
    Severity,
    Status,
    #[serde(rename = "type")]
    IncidentType,
    Location,
    ReportedAt,
}

/// Column and direction of the current ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec<K> {
    pub key: K,
    pub direction: SortDirection,
}

impl<K: Copy + PartialEq> SortSpec<K> {
    pub fn new(key: K, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: K) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn descending(key: K) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    /// Column-header click: the same key flips direction, a new key starts
    /// ascending.
    pub fn toggle(current: Option<Self>, key: K) -> Self {
        match current {
            Some(spec) if spec.key == key => Self::new(key, spec.direction.flipped()),
            _ => Self::ascending(key),
        }
    }
}

/// Compare two records under `spec`.
pub fn compare<R: Reviewable>(a: &R, b: &R, spec: &SortSpec<R::SortKey>) -> Ordering {
    let ord = a.sort_value(spec.key).compare(&b.sort_value(spec.key));
    match spec.direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

/// A sorted copy of `records`. Ties keep their input order in both
/// directions.
pub fn sort<R: Reviewable>(records: &[R], spec: &SortSpec<R::SortKey>) -> Vec<R> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| compare(a, b, spec));
    out
}
