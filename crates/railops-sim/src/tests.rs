//! Tests for the position simulator, movement system, and map snapshots.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use railops_core::commands::MapCommand;
use railops_core::components::{RouteProgress, TrainMarker};
use railops_core::enums::*;
use railops_core::error::RouteError;
use railops_core::events::SimEvent;
use railops_core::types::{Position, Route};

use crate::engine::{PositionSimulator, SimConfig, TrainSpec};
use crate::error::SimError;

fn marker(id: &str) -> TrainMarker {
    TrainMarker {
        id: id.into(),
        number: format!("9{id}"),
        name: format!("Test {id}"),
        train_type: TrainType::Passenger,
        status: TrainStatus::OnTime,
        speed: 60,
        destination: "Nowhere".into(),
        delay: None,
        passengers: None,
        cargo: None,
    }
}

fn spec(id: &str, coords: &[(f64, f64)]) -> TrainSpec {
    TrainSpec {
        marker: marker(id),
        waypoints: coords.iter().map(|&(x, y)| Position::new(x, y)).collect(),
    }
}

fn single(config: SimConfig, coords: &[(f64, f64)]) -> PositionSimulator {
    PositionSimulator::with_trains(config, vec![spec("t", coords)]).unwrap()
}

fn from_position() -> SimConfig {
    SimConfig {
        interpolation: Interpolation::FromPosition,
        ..Default::default()
    }
}

/// Whether `p` lies on the closed segment `a -> b` (within float tolerance).
fn on_segment(p: DVec2, a: DVec2, b: DVec2) -> bool {
    let ab = b - a;
    let ap = p - a;
    let len2 = ab.length_squared();
    if len2 < 1e-12 {
        return ap.length() < 1e-9;
    }
    let off_line = ab.perp_dot(ap).abs() / len2.sqrt();
    let t = ap.dot(ab) / len2;
    off_line < 1e-6 && (-1e-9..=1.0 + 1e-9).contains(&t)
}

// ---- End-to-end scenario: two-point line ----

#[test]
fn test_line_first_tick_from_waypoint() {
    let mut sim = single(SimConfig::default(), &[(0.0, 0.0), (10.0, 0.0)]);
    let snap = sim.tick();
    let t = &snap.trains[0];
    assert_eq!(t.position, Position::new(3.0, 0.0));
    assert_eq!(t.current_index, 0);
    assert!(snap.events.is_empty());
}

#[test]
fn test_line_from_waypoint_recomputes_each_tick() {
    // Remaining distance is always 7, so the legacy rule never arrives.
    let mut sim = single(SimConfig::default(), &[(0.0, 0.0), (10.0, 0.0)]);
    for _ in 0..20 {
        let snap = sim.tick();
        assert_eq!(snap.trains[0].position, Position::new(3.0, 0.0));
        assert_eq!(snap.trains[0].current_index, 0);
    }
}

#[test]
fn test_line_from_position_arrives_then_wraps() {
    let mut sim = single(from_position(), &[(0.0, 0.0), (10.0, 0.0)]);

    let snap = sim.tick();
    assert_eq!(snap.trains[0].position, Position::new(3.0, 0.0));
    assert_eq!(snap.trains[0].current_index, 0);

    // 3 + 7 * 0.3 = 5.1, remaining 4.9 < 5: arrive at waypoint 1.
    let snap = sim.tick();
    assert_eq!(snap.trains[0].current_index, 1);
    assert_eq!(snap.trains[0].position, Position::new(10.0, 0.0));
    assert_eq!(
        snap.events,
        vec![SimEvent::WaypointReached {
            train_id: "t".into(),
            index: 1
        }]
    );

    // Last segment leads back to waypoint 0.
    let snap = sim.tick();
    let t = &snap.trains[0];
    assert!((t.position.x - 7.0).abs() < 1e-9);
    assert_eq!(t.position.y, 0.0);
    assert!((t.heading.degrees.abs() - 180.0).abs() < 1e-9);
}

#[test]
fn test_two_point_route_teleports_to_start() {
    // Short segments arrive every tick: 0 -> 1 -> 0 (wrap, not ping-pong).
    let mut sim = single(SimConfig::default(), &[(0.0, 0.0), (4.0, 0.0)]);

    let snap = sim.tick();
    assert_eq!(snap.trains[0].current_index, 1);
    assert_eq!(snap.trains[0].position, Position::new(4.0, 0.0));

    let snap = sim.tick();
    assert_eq!(snap.trains[0].current_index, 0);
    assert_eq!(snap.trains[0].position, Position::new(0.0, 0.0));
    assert!(snap
        .events
        .contains(&SimEvent::RouteLooped { train_id: "t".into() }));
}

// ---- Loop property ----

#[test]
fn test_short_segment_square_loops_every_four_ticks() {
    let square = [(0.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)];
    let mut sim = single(SimConfig::default(), &square);

    for expected in [1, 2, 3, 0, 1, 2, 3, 0] {
        let snap = sim.tick();
        assert_eq!(snap.trains[0].current_index, expected);
    }
}

#[test]
fn test_default_map_loops_with_from_position() {
    let mut sim = PositionSimulator::default_map(from_position()).unwrap();
    let n = sim.train_count();
    let mut left_start = vec![false; n];
    let mut looped = vec![false; n];

    for _ in 0..1000 {
        let snap = sim.tick();
        for (i, t) in snap.trains.iter().enumerate() {
            if t.current_index != 0 {
                left_start[i] = true;
            } else if left_start[i] {
                looped[i] = true;
            }
        }
        if looped.iter().all(|&l| l) {
            break;
        }
    }
    assert!(
        looped.iter().all(|&l| l),
        "every train should return to waypoint 0, got {looped:?}"
    );
}

// ---- Segment invariant ----

#[test]
fn test_position_stays_on_current_segment() {
    for (seed, interpolation) in [
        (7_u64, Interpolation::FromWaypoint),
        (7, Interpolation::FromPosition),
        (99, Interpolation::FromWaypoint),
        (99, Interpolation::FromPosition),
    ] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let trains: Vec<TrainSpec> = (0..12)
            .map(|i| {
                let len = rng.gen_range(2..7);
                let coords: Vec<(f64, f64)> = (0..len)
                    .map(|_| (rng.gen_range(0.0..60.0), rng.gen_range(0.0..60.0)))
                    .collect();
                spec(&format!("r{i:02}"), &coords)
            })
            .collect();

        let config = SimConfig {
            interpolation,
            ..Default::default()
        };
        let mut sim = PositionSimulator::with_trains(config, trains).unwrap();

        for _ in 0..200 {
            sim.tick();
            for (_, (progress, pos)) in sim.world().query::<(&RouteProgress, &Position)>().iter() {
                assert!(progress.current_index < progress.route.len());
                let (a, b) = progress.route.segment(progress.current_index);
                assert!(
                    on_segment(pos.to_vec(), a, b),
                    "seed {seed}: {pos:?} off segment {a:?} -> {b:?}"
                );
            }
        }
    }
}

// ---- Pause / play ----

#[test]
fn test_pause_freezes_positions_and_time() {
    let mut sim = PositionSimulator::default_map(from_position()).unwrap();
    sim.tick();
    let before = sim.snapshot();

    sim.queue_command(MapCommand::Pause);
    for _ in 0..5 {
        let snap = sim.tick();
        assert!(!snap.animating);
        assert_eq!(snap.trains, before.trains);
        assert_eq!(snap.time, before.time);
    }

    sim.queue_command(MapCommand::Play);
    let snap = sim.tick();
    assert!(snap.animating);
    assert!(snap.time.tick > before.time.tick);
    assert_ne!(snap.trains, before.trains);
}

#[test]
fn test_toggle_applies_before_movement() {
    let mut sim = single(SimConfig::default(), &[(0.0, 0.0), (10.0, 0.0)]);
    sim.queue_command(MapCommand::ToggleAnimation);
    let snap = sim.tick();
    assert!(!snap.animating);
    assert_eq!(snap.trains[0].position, Position::new(0.0, 0.0));

    sim.queue_command(MapCommand::ToggleAnimation);
    let snap = sim.tick();
    assert!(snap.animating);
    assert_eq!(snap.trains[0].position, Position::new(3.0, 0.0));
}

#[test]
fn test_start_paused_config() {
    let config = SimConfig {
        start_animating: false,
        ..Default::default()
    };
    let mut sim = single(config, &[(0.0, 0.0), (10.0, 0.0)]);
    let snap = sim.tick();
    assert_eq!(snap.time.tick, 0);
    assert_eq!(snap.trains[0].position, Position::new(0.0, 0.0));
}

#[test]
fn test_snapshot_does_not_advance() {
    let mut sim = PositionSimulator::default_map(SimConfig::default()).unwrap();
    let a = sim.snapshot();
    let b = sim.snapshot();
    assert_eq!(a, b);
    assert_eq!(a.time.tick, 0);
    sim.tick();
    assert_eq!(sim.time().tick, 1);
}

// ---- Construction errors ----

#[test]
fn test_single_waypoint_route_fails_fast() {
    let result = PositionSimulator::with_trains(
        SimConfig::default(),
        vec![spec("ok", &[(0.0, 0.0), (1.0, 1.0)]), spec("bad", &[(3.0, 3.0)])],
    );
    match result {
        Err(SimError::InvalidRoute { train_id, source }) => {
            assert_eq!(train_id, "bad");
            assert_eq!(source, RouteError::TooShort { len: 1, min: 2 });
        }
        Err(other) => panic!("unexpected error {other:?}"),
        Ok(_) => panic!("simulator must not be constructed with an invalid route"),
    }
}

#[test]
fn test_duplicate_train_rejected() {
    let mut sim = single(SimConfig::default(), &[(0.0, 0.0), (10.0, 0.0)]);
    let err = sim
        .spawn_train(spec("t", &[(1.0, 1.0), (2.0, 2.0)]))
        .unwrap_err();
    assert_eq!(err, SimError::DuplicateTrain("t".into()));
    assert_eq!(sim.train_count(), 1);
}

// ---- Default map ----

#[test]
fn test_default_map_layout() {
    let sim = PositionSimulator::default_map(SimConfig::default()).unwrap();
    assert_eq!(sim.network().stations.len(), 6);
    assert_eq!(sim.network().segments.len(), 5);

    let snap = sim.snapshot();
    let ids: Vec<&str> = snap.trains.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);

    let rajdhani = &snap.trains[0];
    assert_eq!(rajdhani.position, Position::new(200.0, 150.0));
    assert!((rajdhani.heading.degrees - 45.0).abs() < 1e-9);
}

#[test]
fn test_default_map_from_waypoint_first_tick() {
    let mut sim = PositionSimulator::default_map(SimConfig::default()).unwrap();
    let snap = sim.tick();
    let rajdhani = &snap.trains[0];
    assert!((rajdhani.position.x - 215.0).abs() < 1e-9);
    assert!((rajdhani.position.y - 165.0).abs() < 1e-9);
    assert_eq!(rajdhani.current_index, 0);
}

#[test]
fn test_route_of_default_trains_is_valid() {
    for spec in crate::network::default_trains() {
        let route = Route::new(spec.waypoints.iter().map(|p| p.to_vec()).collect());
        assert!(route.is_ok(), "train {} has an invalid route", spec.marker.id);
    }
}

// ---- Selection ----

#[test]
fn test_select_and_clear_train() {
    let mut sim = PositionSimulator::default_map(SimConfig::default()).unwrap();

    sim.queue_command(MapCommand::SelectTrain {
        train_id: "3".into(),
    });
    let snap = sim.tick();
    let detail = snap.selected.expect("train 3 should be selected");
    assert_eq!(detail.name, "Freight Special");
    assert_eq!(detail.cargo.as_deref(), Some("Coal - 2000T"));
    assert_eq!(detail.position, snap.trains[2].position);

    sim.queue_command(MapCommand::SelectTrain {
        train_id: "nope".into(),
    });
    let snap = sim.tick();
    assert_eq!(snap.selected.map(|d| d.id), Some("3".to_string()));

    sim.queue_command(MapCommand::ClearSelection);
    let snap = sim.tick();
    assert!(snap.selected.is_none());
}

// ---- Determinism ----

#[test]
fn test_same_input_same_snapshots() {
    let mut a = PositionSimulator::default_map(from_position()).unwrap();
    let mut b = PositionSimulator::default_map(from_position()).unwrap();
    for _ in 0..100 {
        let json_a = serde_json::to_string(&a.tick()).unwrap();
        let json_b = serde_json::to_string(&b.tick()).unwrap();
        assert_eq!(json_a, json_b, "snapshots diverged");
    }
}

#[test]
fn test_markers_have_display_data() {
    let sim = PositionSimulator::default_map(SimConfig::default()).unwrap();
    let count = sim
        .world()
        .query::<&TrainMarker>()
        .iter()
        .filter(|(_, m)| m.train_type == TrainType::Express)
        .count();
    assert_eq!(count, 2);
}
