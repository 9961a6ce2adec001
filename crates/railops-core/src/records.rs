//! Domain records shown and reviewed on the dashboard.
//!
//! Records are plain data. Filtering, sorting and status transitions live
//! in `railops-review`.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Position;

/// One row of the train movements table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainRecord {
    pub id: String,
    pub train_number: String,
    pub train_name: String,
    pub train_type: TrainType,
    pub status: TrainStatus,
    pub origin: String,
    pub destination: String,
    /// Scheduled departure, `HH:MM`.
    pub departure: String,
    /// Scheduled arrival, `HH:MM` with an optional `+N` day suffix.
    pub arrival: String,
    pub current_location: String,
    /// Minutes behind schedule; negative when running early.
    pub delay: i32,
    #[serde(default)]
    pub passengers: Option<u32>,
    #[serde(default)]
    pub cargo: Option<String>,
}

/// Projected effect of applying a recommendation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatedImpact {
    /// Minutes saved.
    pub time_reduction: u32,
    /// Percent.
    pub cost_saving: u32,
    /// Percent.
    pub efficiency_gain: u32,
    /// Percent.
    pub risk_reduction: u32,
}

/// Evidence behind a recommendation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reasoning {
    pub data_points: Vec<String>,
    pub analysis: String,
    pub alternatives: Vec<String>,
}

/// How a recommendation would be carried out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Implementation {
    pub steps: Vec<String>,
    pub duration: String,
    pub resources: Vec<String>,
    pub risks: Vec<String>,
}

/// Trains, stations and routes a recommendation touches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AffectedEntities {
    pub trains: Vec<String>,
    pub stations: Vec<String>,
    pub routes: Vec<String>,
}

/// An AI-generated operational recommendation awaiting review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: RecommendationCategory,
    pub priority: Priority,
    /// Model confidence, 0-100.
    pub confidence: u32,
    pub estimated_impact: EstimatedImpact,
    pub reasoning: Reasoning,
    pub implementation: Implementation,
    pub affected_entities: AffectedEntities,
    pub status: RecommendationStatus,
    /// RFC 3339 timestamp.
    pub timestamp: String,
}

/// An entry in an incident's action or update log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncidentLogEntry {
    pub id: String,
    pub message: String,
    pub timestamp: String,
    pub user: String,
}

/// A tracked operational incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    pub id: String,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub incident_type: IncidentType,
    pub location: String,
    pub reported_by: String,
    pub reported_at: String,
    #[serde(default)]
    pub resolved_at: Option<String>,
    pub affected_trains: Vec<String>,
    pub estimated_impact: String,
    pub actions: Vec<IncidentLogEntry>,
    pub updates: Vec<IncidentLogEntry>,
}

/// Value of a scenario parameter as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Number(f64),
    Text(String),
}

impl ParameterValue {
    /// Numeric input becomes a number, anything else stays text.
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => ParameterValue::Number(n),
            _ => ParameterValue::Text(input.to_string()),
        }
    }
}

/// One disruption injected into a what-if scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParameter {
    pub id: String,
    pub kind: ParameterKind,
    pub name: String,
    pub value: ParameterValue,
    pub description: String,
}

/// A what-if simulation scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub description: String,
    pub parameters: Vec<ScenarioParameter>,
    pub status: ScenarioStatus,
    /// Session time at which the draft was started (seconds).
    pub created_at_secs: f64,
}

/// A station drawn on the network map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: String,
    pub name: String,
    pub code: String,
    pub position: Position,
    pub kind: StationKind,
}

/// A drawn track segment between two map points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSegment {
    pub id: String,
    pub from: Position,
    pub to: Position,
    pub congestion: Congestion,
}
