//! ECS components for train marker entities.
//!
//! Components are plain data structs with no methods.
//! Movement logic lives in the simulator's systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Route;

/// Identity and display data of a train marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainMarker {
    /// Unique marker id, stable for the session.
    pub id: String,
    pub number: String,
    pub name: String,
    pub train_type: TrainType,
    pub status: TrainStatus,
    /// Nominal speed shown on the marker (km/h).
    pub speed: u32,
    pub destination: String,
    /// Minutes behind schedule, if reported.
    pub delay: Option<i32>,
    pub passengers: Option<u32>,
    pub cargo: Option<String>,
}

/// Where a marker is on its looping route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteProgress {
    pub route: Route,
    /// Index of the last waypoint reached.
    pub current_index: usize,
}

// Position and Heading from types.rs are attached as components too.
