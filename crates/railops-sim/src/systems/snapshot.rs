//! Snapshot system: queries the ECS world and builds a complete MapSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use railops_core::components::{RouteProgress, TrainMarker};
use railops_core::events::SimEvent;
use railops_core::state::{MapSnapshot, MarkerView, TrainDetailView};
use railops_core::types::{Heading, Position, SimTime};

/// Build a complete MapSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    animating: bool,
    selected: Option<&str>,
    events: Vec<SimEvent>,
) -> MapSnapshot {
    MapSnapshot {
        time: *time,
        animating,
        trains: build_markers(world),
        selected: selected.and_then(|id| build_detail(world, id)),
        events,
    }
}

/// Build MarkerView list, sorted by train id.
fn build_markers(world: &World) -> Vec<MarkerView> {
    let mut markers: Vec<MarkerView> = world
        .query::<(&TrainMarker, &RouteProgress, &Position, &Heading)>()
        .iter()
        .map(|(_, (marker, progress, pos, heading))| MarkerView {
            id: marker.id.clone(),
            number: marker.number.clone(),
            train_type: marker.train_type,
            status: marker.status,
            position: *pos,
            heading: *heading,
            current_index: progress.current_index,
            speed: marker.speed,
        })
        .collect();

    markers.sort_by(|a, b| a.id.cmp(&b.id));
    markers
}

/// Detail panel for one train, if it exists.
fn build_detail(world: &World, train_id: &str) -> Option<TrainDetailView> {
    world
        .query::<(&TrainMarker, &Position)>()
        .iter()
        .find(|(_, (marker, _))| marker.id == train_id)
        .map(|(_, (marker, pos))| TrainDetailView {
            id: marker.id.clone(),
            number: marker.number.clone(),
            name: marker.name.clone(),
            train_type: marker.train_type,
            status: marker.status,
            speed: marker.speed,
            destination: marker.destination.clone(),
            delay: marker.delay,
            passengers: marker.passengers,
            cargo: marker.cargo.clone(),
            position: *pos,
        })
}
