//! `ReviewBoard`: the state behind one filterable, sortable list.

use std::collections::HashSet;

use log::debug;

use railops_core::records::Recommendation;

use crate::criteria::{ActiveFilter, Criteria};
use crate::error::{ReviewError, ReviewResult};
use crate::filter::filter;
use crate::record::Reviewable;
use crate::sort::{sort, SortSpec};
use crate::stats::{recommendation_stats, status_counts, RecommendationStats, StatusCounts};
use crate::status;

/// A record collection with its current criteria and ordering.
#[derive(Debug, Clone)]
pub struct ReviewBoard<R: Reviewable> {
    records: Vec<R>,
    criteria: R::Criteria,
    sort: Option<SortSpec<R::SortKey>>,
}

impl<R: Reviewable> ReviewBoard<R> {
    /// Rejects collections with duplicate ids.
    pub fn new(records: Vec<R>) -> ReviewResult<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(ReviewError::DuplicateId(record.id().to_string()));
            }
        }
        Ok(Self {
            records,
            criteria: R::Criteria::default(),
            sort: None,
        })
    }

    pub fn with_sort(mut self, spec: SortSpec<R::SortKey>) -> Self {
        self.sort = Some(spec);
        self
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    pub fn criteria(&self) -> &R::Criteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: R::Criteria) {
        self.criteria = criteria;
    }

    pub fn apply_filter(&mut self, key: &str, value: &str) -> ReviewResult<()> {
        self.criteria.apply(key, value)
    }

    pub fn clear_filter(&mut self, key: &str) -> ReviewResult<()> {
        self.criteria.clear(key)
    }

    pub fn clear_filters(&mut self) {
        self.criteria.clear_all();
    }

    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        self.criteria.active_filters()
    }

    pub fn sort_spec(&self) -> Option<SortSpec<R::SortKey>> {
        self.sort
    }

    pub fn set_sort(&mut self, spec: Option<SortSpec<R::SortKey>>) {
        self.sort = spec;
    }

    /// Column-header click on `key`.
    pub fn toggle_sort(&mut self, key: R::SortKey) -> SortSpec<R::SortKey> {
        let spec = SortSpec::toggle(self.sort, key);
        self.sort = Some(spec);
        spec
    }

    /// Filtered, then sorted, copy of the collection.
    pub fn view(&self) -> Vec<R> {
        let filtered = filter(&self.records, &self.criteria);
        match &self.sort {
            Some(spec) => sort(&filtered, spec),
            None => filtered,
        }
    }

    /// Move one record to `status`. On error the collection is unchanged.
    pub fn set_status(&mut self, id: &str, status: R::Status) -> ReviewResult<&R> {
        self.records = status::set_status(&self.records, id, status)?;
        debug!("board now holds {} records", self.records.len());
        self.find(id)
            .ok_or_else(|| ReviewError::NotFound { id: id.to_string() })
    }

    pub fn status_counts(&self) -> StatusCounts<R::Status> {
        status_counts(&self.records)
    }
}

impl ReviewBoard<Recommendation> {
    pub fn stats(&self) -> RecommendationStats {
        recommendation_stats(&self.records)
    }
}
