//! Typed filter criteria per record kind.
//!
//! Frontend input arrives as `(key, value)` strings and is parsed here, at
//! the boundary. A categorical value outside the field's enumeration is
//! rejected with `ReviewError::UnknownFilterValue`; once parsed, criteria
//! cannot hold unknown values.

use serde::de::{value::StrDeserializer, DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use railops_core::constants::SELECTION_ALL;
use railops_core::enums::*;
use railops_core::records::{Incident, Recommendation, TrainRecord};

use crate::error::{ReviewError, ReviewResult};
use crate::filter::matches_search;
use crate::record::Reviewable;

/// Serialized label of an enum value (`TrainStatus::OnTime` -> `"on-time"`).
pub fn label<T: Serialize>(value: &T) -> String {
    match serde_json::to_value(value) {
        Ok(serde_json::Value::String(s)) => s,
        Ok(other) => other.to_string(),
        Err(_) => String::new(),
    }
}

/// Parse an enum from its serialized label.
pub fn parse_label<T: DeserializeOwned>(input: &str) -> Option<T> {
    let de: StrDeserializer<'_, serde::de::value::Error> = input.into_deserializer();
    T::deserialize(de).ok()
}

/// A categorical filter: everything, or exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted == value,
        }
    }
}

impl<T> Selection<T> {
    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Only(_))
    }
}

impl<T: DeserializeOwned> Selection<T> {
    /// Parse a select-box value. `"all"` and `""` mean no constraint.
    pub fn parse(field: &str, input: &str) -> ReviewResult<Self> {
        if input.is_empty() || input == SELECTION_ALL {
            return Ok(Selection::All);
        }
        parse_label(input)
            .map(Selection::Only)
            .ok_or_else(|| ReviewError::UnknownFilterValue {
                field: field.to_string(),
                value: input.to_string(),
            })
    }
}

impl<T: Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.serialize_str(SELECTION_ALL),
            Selection::Only(value) => value.serialize(serializer),
        }
    }
}

impl<'de, T: DeserializeOwned> Deserialize<'de> for Selection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Selection::parse("selection", &raw).map_err(serde::de::Error::custom)
    }
}

/// A filter currently narrowing the view, shown as a removable chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveFilter {
    pub key: String,
    pub value: String,
}

impl ActiveFilter {
    fn new(key: &str, value: impl Into<String>) -> Self {
        Self {
            key: key.to_string(),
            value: value.into(),
        }
    }
}

/// Filter criteria for one record kind.
pub trait Criteria: Clone + Default + PartialEq + std::fmt::Debug {
    type Record: Reviewable;

    /// Whether `record` passes every active criterion.
    fn matches(&self, record: &Self::Record) -> bool;

    /// Active criteria in display order.
    fn active_filters(&self) -> Vec<ActiveFilter>;

    /// Set one criterion from frontend input.
    fn apply(&mut self, key: &str, value: &str) -> ReviewResult<()>;

    /// Reset one criterion to "no constraint".
    fn clear(&mut self, key: &str) -> ReviewResult<()>;

    fn clear_all(&mut self) {
        *self = Self::default();
    }

    fn is_empty(&self) -> bool {
        self.active_filters().is_empty()
    }
}

fn push_selection<T: Serialize>(out: &mut Vec<ActiveFilter>, key: &str, selection: &Selection<T>) {
    if let Selection::Only(value) = selection {
        out.push(ActiveFilter::new(key, label(value)));
    }
}

fn push_text(out: &mut Vec<ActiveFilter>, key: &str, text: &str) {
    if !text.is_empty() {
        out.push(ActiveFilter::new(key, text));
    }
}

/// Criteria for the train movements table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainCriteria {
    pub search: String,
    pub train_type: Selection<TrainType>,
    pub status: Selection<TrainStatus>,
}

impl Criteria for TrainCriteria {
    type Record = TrainRecord;

    fn matches(&self, record: &TrainRecord) -> bool {
        matches_search(&self.search, &record.search_fields())
            && self.train_type.matches(&record.train_type)
            && self.status.matches(&record.status)
    }

    fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut out = Vec::new();
        push_selection(&mut out, "type", &self.train_type);
        push_selection(&mut out, "status", &self.status);
        push_text(&mut out, "search", &self.search);
        out
    }

    fn apply(&mut self, key: &str, value: &str) -> ReviewResult<()> {
        match key {
            "search" => self.search = value.to_string(),
            "type" => self.train_type = Selection::parse(key, value)?,
            "status" => self.status = Selection::parse(key, value)?,
            _ => return Err(ReviewError::UnknownFilterKey(key.to_string())),
        }
        Ok(())
    }

    fn clear(&mut self, key: &str) -> ReviewResult<()> {
        match key {
            "search" => self.search.clear(),
            "type" => self.train_type = Selection::All,
            "status" => self.status = Selection::All,
            _ => return Err(ReviewError::UnknownFilterKey(key.to_string())),
        }
        Ok(())
    }
}

/// Criteria for the AI recommendations list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationCriteria {
    pub search: String,
    pub category: Selection<RecommendationCategory>,
    pub priority: Selection<Priority>,
}

impl Criteria for RecommendationCriteria {
    type Record = Recommendation;

    fn matches(&self, record: &Recommendation) -> bool {
        matches_search(&self.search, &record.search_fields())
            && self.category.matches(&record.category)
            && self.priority.matches(&record.priority)
    }

    fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut out = Vec::new();
        push_selection(&mut out, "category", &self.category);
        push_selection(&mut out, "priority", &self.priority);
        push_text(&mut out, "search", &self.search);
        out
    }

    fn apply(&mut self, key: &str, value: &str) -> ReviewResult<()> {
        match key {
            "search" => self.search = value.to_string(),
            "category" => self.category = Selection::parse(key, value)?,
            "priority" => self.priority = Selection::parse(key, value)?,
            _ => return Err(ReviewError::UnknownFilterKey(key.to_string())),
        }
        Ok(())
    }

    fn clear(&mut self, key: &str) -> ReviewResult<()> {
        match key {
            "search" => self.search.clear(),
            "category" => self.category = Selection::All,
            "priority" => self.priority = Selection::All,
            _ => return Err(ReviewError::UnknownFilterKey(key.to_string())),
        }
        Ok(())
    }
}

/// Criteria for the incident tracker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IncidentCriteria {
    pub search: String,
    pub severity: Selection<Severity>,
    pub status: Selection<IncidentStatus>,
    pub incident_type: Selection<IncidentType>,
    /// Case-insensitive substring of the incident location.
    pub location: String,
}

impl Criteria for IncidentCriteria {
    type Record = Incident;

    fn matches(&self, record: &Incident) -> bool {
        matches_search(&self.search, &record.search_fields())
            && self.severity.matches(&record.severity)
            && self.status.matches(&record.status)
            && self.incident_type.matches(&record.incident_type)
            && matches_search(&self.location, &[record.location.as_str()])
    }

    fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut out = Vec::new();
        push_selection(&mut out, "severity", &self.severity);
        push_selection(&mut out, "status", &self.status);
        push_selection(&mut out, "type", &self.incident_type);
        push_text(&mut out, "location", &self.location);
        push_text(&mut out, "search", &self.search);
        out
    }

    fn apply(&mut self, key: &str, value: &str) -> ReviewResult<()> {
        match key {
            "search" => self.search = value.to_string(),
            "location" => self.location = value.to_string(),
            "severity" => self.severity = Selection::parse(key, value)?,
            "status" => self.status = Selection::parse(key, value)?,
            "type" => self.incident_type = Selection::parse(key, value)?,
            _ => return Err(ReviewError::UnknownFilterKey(key.to_string())),
        }
        Ok(())
    }

    fn clear(&mut self, key: &str) -> ReviewResult<()> {
        match key {
            "search" => self.search.clear(),
            "location" => self.location.clear(),
            "severity" => self.severity = Selection::All,
            "status" => self.status = Selection::All,
            "type" => self.incident_type = Selection::All,
            _ => return Err(ReviewError::UnknownFilterKey(key.to_string())),
        }
        Ok(())
    }
}
