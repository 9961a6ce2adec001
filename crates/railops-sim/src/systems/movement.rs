//! Route-following movement system.
//!
//! Each tick moves a marker `progress_fraction` of the way along its current
//! segment and advances the waypoint index once the marker is within the
//! arrival threshold of the next waypoint.

use glam::DVec2;
use hecs::World;
use log::debug;

use railops_core::components::{RouteProgress, TrainMarker};
use railops_core::enums::Interpolation;
use railops_core::events::SimEvent;
use railops_core::types::{Heading, Position, Route};

use crate::engine::SimConfig;

/// Result of advancing one marker by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub position: DVec2,
    pub heading: Heading,
    /// Waypoint index after this tick.
    pub current_index: usize,
    /// Whether the next waypoint was reached this tick.
    pub arrived: bool,
}

/// Advance a single marker along `route`. Pure; no ECS access.
///
/// On arrival the marker is placed on the reached waypoint, which is the
/// start of its new segment.
pub fn advance(route: &Route, current_index: usize, position: Position, config: &SimConfig) -> Step {
    let next_index = route.next_index(current_index);
    let (current, next) = route.segment(current_index);

    let heading = Heading::between(current, next);

    let origin = match config.interpolation {
        Interpolation::FromWaypoint => current,
        Interpolation::FromPosition => position.to_vec(),
    };
    let moved = origin + (next - origin) * config.progress_fraction;
    let remaining = next.distance(moved);

    if remaining < config.arrival_threshold {
        Step {
            position: next,
            heading,
            current_index: next_index,
            arrived: true,
        }
    } else {
        Step {
            position: moved,
            heading,
            current_index,
            arrived: false,
        }
    }
}

/// Run one movement tick for every marker in the world.
pub fn run(world: &mut World, config: &SimConfig, events: &mut Vec<SimEvent>) {
    for (_entity, (marker, progress, pos, heading)) in
        world.query_mut::<(&TrainMarker, &mut RouteProgress, &mut Position, &mut Heading)>()
    {
        let step = advance(&progress.route, progress.current_index, *pos, config);
        *pos = step.position.into();
        *heading = step.heading;

        if step.arrived {
            progress.current_index = step.current_index;
            debug!(
                "train {} reached waypoint {} at ({:.1}, {:.1})",
                marker.id, step.current_index, pos.x, pos.y
            );
            events.push(SimEvent::WaypointReached {
                train_id: marker.id.clone(),
                index: step.current_index,
            });
            if step.current_index == 0 {
                events.push(SimEvent::RouteLooped {
                    train_id: marker.id.clone(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_route() -> Route {
        Route::from_points(&[(0.0, 0.0), (10.0, 0.0)]).unwrap()
    }

    fn from_position() -> SimConfig {
        SimConfig {
            interpolation: Interpolation::FromPosition,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_tick_covers_fraction_of_segment() {
        let step = advance(&line_route(), 0, Position::new(0.0, 0.0), &SimConfig::default());
        assert_eq!(step.position, DVec2::new(3.0, 0.0));
        assert_eq!(step.current_index, 0);
        assert!(!step.arrived);
        assert!(step.heading.degrees.abs() < 1e-12);
    }

    #[test]
    fn test_from_waypoint_ignores_prior_position() {
        // Already at (3, 0): the legacy rule recomputes from waypoint 0.
        let step = advance(&line_route(), 0, Position::new(3.0, 0.0), &SimConfig::default());
        assert_eq!(step.position, DVec2::new(3.0, 0.0));
        assert!(!step.arrived);
    }

    #[test]
    fn test_from_position_approaches_and_arrives() {
        let config = from_position();
        let step = advance(&line_route(), 0, Position::new(3.0, 0.0), &config);
        // 3 + (10 - 3) * 0.3 = 5.1, remaining 4.9 < 5
        assert!(step.arrived);
        assert_eq!(step.current_index, 1);
        assert_eq!(step.position, DVec2::new(10.0, 0.0));
    }

    #[test]
    fn test_short_segment_arrives_from_waypoint() {
        // 0.7 * 6 = 4.2 remaining, under the threshold.
        let route = Route::from_points(&[(0.0, 0.0), (6.0, 0.0), (6.0, 6.0)]).unwrap();
        let step = advance(&route, 0, Position::new(0.0, 0.0), &SimConfig::default());
        assert!(step.arrived);
        assert_eq!(step.current_index, 1);
    }

    #[test]
    fn test_last_segment_heads_back_to_start() {
        let step = advance(&line_route(), 1, Position::new(10.0, 0.0), &SimConfig::default());
        assert_eq!(step.position, DVec2::new(7.0, 0.0));
        assert!((step.heading.degrees.abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_length_segment_arrives_immediately() {
        let route = Route::from_points(&[(5.0, 5.0), (5.0, 5.0), (20.0, 5.0)]).unwrap();
        let step = advance(&route, 0, Position::new(5.0, 5.0), &SimConfig::default());
        assert!(step.arrived);
        assert_eq!(step.current_index, 1);
    }
}
