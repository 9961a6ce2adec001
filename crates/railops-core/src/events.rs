//! Events emitted by the position simulator during a tick.

use serde::{Deserialize, Serialize};

/// Something noteworthy that happened to a marker this tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A marker came within the arrival threshold of its next waypoint.
    WaypointReached { train_id: String, index: usize },
    /// A marker wrapped from its last waypoint back to waypoint 0.
    RouteLooped { train_id: String },
}
