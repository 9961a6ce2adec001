//! Map snapshot: the complete visible simulator state sent to the renderer each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::records::{RouteSegment, Station};
use crate::types::{Heading, Position, SimTime};

/// Everything the map surface needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapSnapshot {
    pub time: SimTime,
    /// Whether markers are currently moving.
    pub animating: bool,
    /// One entry per train, sorted by id.
    pub trains: Vec<MarkerView>,
    pub selected: Option<TrainDetailView>,
    /// Events raised during the tick that produced this snapshot.
    pub events: Vec<SimEvent>,
}

/// A train marker on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerView {
    pub id: String,
    pub number: String,
    pub train_type: TrainType,
    pub status: TrainStatus,
    pub position: Position,
    pub heading: Heading,
    /// Index of the last waypoint reached.
    pub current_index: usize,
    pub speed: u32,
}

/// Detail panel content for the selected train.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainDetailView {
    pub id: String,
    pub number: String,
    pub name: String,
    pub train_type: TrainType,
    pub status: TrainStatus,
    pub speed: u32,
    pub destination: String,
    pub delay: Option<i32>,
    pub passengers: Option<u32>,
    pub cargo: Option<String>,
    pub position: Position,
}

/// Static network layout: stations and drawn segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkView {
    pub stations: Vec<Station>,
    pub segments: Vec<RouteSegment>,
}
