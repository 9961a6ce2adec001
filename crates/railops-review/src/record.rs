//! The `Reviewable` seam: what the pipeline needs to know about a record kind.

use std::fmt::Debug;

use railops_core::records::{Incident, Recommendation, TrainRecord};

use crate::criteria::{Criteria, IncidentCriteria, RecommendationCriteria, TrainCriteria};
use crate::sort::{IncidentSortKey, RecommendationSortKey, SortValue, TrainSortKey};
use crate::status::StatusMachine;

/// A record kind that can be filtered, sorted and moved through statuses.
pub trait Reviewable: Clone + Debug {
    /// Status field and its transition rules.
    type Status: StatusMachine;
    /// Typed filter criteria for this kind.
    type Criteria: Criteria<Record = Self>;
    /// Sortable columns.
    type SortKey: Copy + Debug + PartialEq;

    fn id(&self) -> &str;

    fn status(&self) -> Self::Status;

    fn set_status(&mut self, status: Self::Status);

    /// Free-text fields matched by the search term.
    fn search_fields(&self) -> Vec<&str>;

    fn sort_value(&self, key: Self::SortKey) -> SortValue<'_>;
}

impl Reviewable for TrainRecord {
    type Status = railops_core::enums::TrainStatus;
    type Criteria = TrainCriteria;
    type SortKey = TrainSortKey;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn set_status(&mut self, status: Self::Status) {
        self.status = status;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.train_number.as_str(),
            self.train_name.as_str(),
            self.origin.as_str(),
            self.destination.as_str(),
        ]
    }

    fn sort_value(&self, key: TrainSortKey) -> SortValue<'_> {
        match key {
            TrainSortKey::TrainNumber => SortValue::Text(&self.train_number),
            TrainSortKey::TrainName => SortValue::Text(&self.train_name),
            TrainSortKey::TrainType => SortValue::label(&self.train_type),
            TrainSortKey::Status => SortValue::label(&self.status),
            TrainSortKey::Origin => SortValue::Text(&self.origin),
            TrainSortKey::Destination => SortValue::Text(&self.destination),
            TrainSortKey::Departure => SortValue::Text(&self.departure),
            TrainSortKey::Arrival => SortValue::Text(&self.arrival),
            TrainSortKey::CurrentLocation => SortValue::Text(&self.current_location),
            TrainSortKey::Delay => SortValue::Number(f64::from(self.delay)),
            TrainSortKey::Passengers => self
                .passengers
                .map_or(SortValue::Absent, |p| SortValue::Number(f64::from(p))),
        }
    }
}

impl Reviewable for Recommendation {
    type Status = railops_core::enums::RecommendationStatus;
    type Criteria = RecommendationCriteria;
    type SortKey = RecommendationSortKey;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn set_status(&mut self, status: Self::Status) {
        self.status = status;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn sort_value(&self, key: RecommendationSortKey) -> SortValue<'_> {
        match key {
            RecommendationSortKey::Title => SortValue::Text(&self.title),
            RecommendationSortKey::Category => SortValue::label(&self.category),
            RecommendationSortKey::Priority => SortValue::label(&self.priority),
            RecommendationSortKey::Confidence => SortValue::Number(f64::from(self.confidence)),
            RecommendationSortKey::TimeReduction => {
                SortValue::Number(f64::from(self.estimated_impact.time_reduction))
            }
            RecommendationSortKey::Status => SortValue::label(&self.status),
            RecommendationSortKey::Timestamp => SortValue::Text(&self.timestamp),
        }
    }
}

impl Reviewable for Incident {
    type Status = railops_core::enums::IncidentStatus;
    type Criteria = IncidentCriteria;
    type SortKey = IncidentSortKey;

    fn id(&self) -> &str {
        &self.id
    }

    fn status(&self) -> Self::Status {
        self.status
    }

    fn set_status(&mut self, status: Self::Status) {
        self.status = status;
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }

    fn sort_value(&self, key: IncidentSortKey) -> SortValue<'_> {
        match key {
            IncidentSortKey::Title => SortValue::Text(&self.title),
            IncidentSortKey::Severity => SortValue::label(&self.severity),
            IncidentSortKey::Status => SortValue::label(&self.status),
            IncidentSortKey::IncidentType => SortValue::label(&self.incident_type),
            IncidentSortKey::Location => SortValue::Text(&self.location),
            IncidentSortKey::ReportedAt => SortValue::Text(&self.reported_at),
        }
    }
}
