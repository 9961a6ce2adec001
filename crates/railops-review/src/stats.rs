//! Aggregate statistics, recomputed from the collection on every call.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use railops_core::enums::RecommendationStatus;
use railops_core::records::Recommendation;

use crate::criteria::label;
use crate::record::Reviewable;
use crate::status::StatusMachine;

/// Record count per status. Every status is present, missing ones at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts<S: StatusMachine> {
    counts: BTreeMap<S, usize>,
}

impl<S: StatusMachine> StatusCounts<S> {
    fn zeroed() -> Self {
        Self {
            counts: S::ALL.iter().map(|&s| (s, 0)).collect(),
        }
    }

    pub fn get(&self, status: S) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, usize)> + '_ {
        self.counts.iter().map(|(&s, &n)| (s, n))
    }
}

// Serialized as `{"pending": 3, "accepted": 0, ...}`.
impl<S: StatusMachine> Serialize for StatusCounts<S> {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (status, count) in &self.counts {
            map.serialize_entry(&label(status), count)?;
        }
        map.end()
    }
}

pub fn status_counts<R: Reviewable>(records: &[R]) -> StatusCounts<R::Status> {
    let mut counts = StatusCounts::zeroed();
    for record in records {
        *counts.counts.entry(record.status()).or_insert(0) += 1;
    }
    counts
}

/// Header statistics of the recommendations panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationStats {
    pub counts: StatusCounts<RecommendationStatus>,
    /// Mean confidence in percent; 0 for an empty collection.
    pub average_confidence: f64,
    /// Minutes saved by accepted recommendations.
    pub accepted_time_reduction: u32,
}

pub fn recommendation_stats(records: &[Recommendation]) -> RecommendationStats {
    let average_confidence = if records.is_empty() {
        0.0
    } else {
        let sum: f64 = records.iter().map(|r| f64::from(r.confidence)).sum();
        sum / records.len() as f64
    };

    let accepted_time_reduction = records
        .iter()
        .filter(|r| r.status == RecommendationStatus::Accepted)
        .map(|r| r.estimated_impact.time_reduction)
        .sum();

    RecommendationStats {
        counts: status_counts(records),
        average_confidence,
        accepted_time_reduction,
    }
}
