//! Enumeration types used throughout the dashboard.
//!
//! Serialized labels match the ones the frontend sends and displays
//! (`"on-time"`, `"train_delay"`, ...). Declaration order is the natural
//! sort order of each enum.

use serde::{Deserialize, Serialize};

/// Train service category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainType {
    Passenger,
    Express,
    Freight,
}

/// Running status of a train against its timetable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainStatus {
    OnTime,
    Delayed,
    Early,
    Cancelled,
}

/// Station role on the network map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StationKind {
    Major,
    Junction,
    Terminal,
}

/// Traffic load on a route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Congestion {
    Low,
    Medium,
    High,
}

/// What an AI recommendation is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationCategory {
    Routing,
    Scheduling,
    Maintenance,
    Resource,
    Safety,
}

/// Urgency of a recommendation. Most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

/// Review state of a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecommendationStatus {
    Pending,
    Accepted,
    Rejected,
    Implemented,
}

/// Incident severity. Most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// Incident handling progress, in lifecycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentStatus {
    Active,
    Investigating,
    Resolved,
    Closed,
}

/// Incident cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncidentType {
    Signal,
    Weather,
    Technical,
    Delay,
    Accident,
    Maintenance,
}

/// What-if scenario lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioStatus {
    #[default]
    Draft,
    Running,
    Completed,
}

/// Kind of disruption a scenario parameter injects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    TrainDelay,
    RouteChange,
    Weather,
    Maintenance,
    Capacity,
}

impl ParameterKind {
    /// Human-readable label shown in the parameter picker.
    pub fn label(self) -> &'static str {
        match self {
            ParameterKind::TrainDelay => "Train Delay",
            ParameterKind::RouteChange => "Route Change",
            ParameterKind::Weather => "Weather Impact",
            ParameterKind::Maintenance => "Maintenance",
            ParameterKind::Capacity => "Capacity Change",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ParameterKind::TrainDelay => "Simulate train delays",
            ParameterKind::RouteChange => "Test alternative routing",
            ParameterKind::Weather => "Weather-related disruptions",
            ParameterKind::Maintenance => "Scheduled maintenance impact",
            ParameterKind::Capacity => "Track capacity modifications",
        }
    }
}

/// Sort direction of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// How a tick places a train on its current segment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Interpolation {
    /// Measure progress from the waypoint at the current index every tick.
    /// Matches the legacy map animation exactly.
    #[default]
    FromWaypoint,
    /// Move from the train's last position toward the next waypoint.
    FromPosition,
}
