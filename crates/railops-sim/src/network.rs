//! Built-in network layout and animated trains for the live map.
//!
//! Six stations on the Delhi-Mumbai corridor, five drawn segments, and
//! four trains looping over them.

use railops_core::components::TrainMarker;
use railops_core::enums::*;
use railops_core::records::{RouteSegment, Station};
use railops_core::state::NetworkView;
use railops_core::types::Position;

use crate::engine::TrainSpec;

/// Stations and segments drawn under the markers.
pub fn default_network() -> NetworkView {
    NetworkView {
        stations: vec![
            station("1", "New Delhi", "NDLS", 200.0, 150.0, StationKind::Terminal),
            station("2", "Mumbai Central", "BCT", 100.0, 400.0, StationKind::Terminal),
            station("3", "Kanpur Central", "CNB", 250.0, 200.0, StationKind::Junction),
            station("4", "Nagpur", "NGP", 200.0, 300.0, StationKind::Junction),
            station("5", "Bhopal", "BPL", 150.0, 250.0, StationKind::Major),
            station("6", "Jhansi", "JHS", 220.0, 220.0, StationKind::Major),
        ],
        segments: vec![
            segment("1", (200.0, 150.0), (250.0, 200.0), Congestion::Medium),
            segment("2", (250.0, 200.0), (220.0, 220.0), Congestion::Low),
            segment("3", (220.0, 220.0), (150.0, 250.0), Congestion::High),
            segment("4", (150.0, 250.0), (200.0, 300.0), Congestion::Medium),
            segment("5", (200.0, 300.0), (100.0, 400.0), Congestion::Low),
        ],
    }
}

/// The four trains animated on the live map.
pub fn default_trains() -> Vec<TrainSpec> {
    vec![
        TrainSpec {
            marker: TrainMarker {
                id: "1".into(),
                number: "12345".into(),
                name: "Rajdhani Express".into(),
                train_type: TrainType::Express,
                status: TrainStatus::Delayed,
                speed: 85,
                destination: "Mumbai Central".into(),
                delay: Some(15),
                passengers: Some(1200),
                cargo: None,
            },
            waypoints: points(&[
                (200.0, 150.0),
                (250.0, 200.0),
                (220.0, 220.0),
                (150.0, 250.0),
                (200.0, 300.0),
                (100.0, 400.0),
            ]),
        },
        TrainSpec {
            marker: TrainMarker {
                id: "2".into(),
                number: "67890".into(),
                name: "Shatabdi Express".into(),
                train_type: TrainType::Express,
                status: TrainStatus::OnTime,
                speed: 95,
                destination: "New Delhi".into(),
                delay: None,
                passengers: Some(800),
                cargo: None,
            },
            waypoints: points(&[
                (100.0, 400.0),
                (200.0, 300.0),
                (150.0, 250.0),
                (220.0, 220.0),
                (250.0, 200.0),
                (200.0, 150.0),
            ]),
        },
        TrainSpec {
            marker: TrainMarker {
                id: "3".into(),
                number: "11111".into(),
                name: "Freight Special".into(),
                train_type: TrainType::Freight,
                status: TrainStatus::Early,
                speed: 45,
                destination: "Nagpur".into(),
                delay: None,
                passengers: None,
                cargo: Some("Coal - 2000T".into()),
            },
            waypoints: points(&[
                (150.0, 250.0),
                (200.0, 300.0),
                (220.0, 320.0),
                (180.0, 350.0),
            ]),
        },
        TrainSpec {
            marker: TrainMarker {
                id: "4".into(),
                number: "22222".into(),
                name: "Local Passenger".into(),
                train_type: TrainType::Passenger,
                status: TrainStatus::OnTime,
                speed: 60,
                destination: "Bhopal".into(),
                delay: None,
                passengers: Some(400),
                cargo: None,
            },
            waypoints: points(&[
                (220.0, 220.0),
                (150.0, 250.0),
                (130.0, 270.0),
                (140.0, 290.0),
            ]),
        },
    ]
}

fn station(id: &str, name: &str, code: &str, x: f64, y: f64, kind: StationKind) -> Station {
    Station {
        id: id.into(),
        name: name.into(),
        code: code.into(),
        position: Position::new(x, y),
        kind,
    }
}

fn segment(id: &str, from: (f64, f64), to: (f64, f64), congestion: Congestion) -> RouteSegment {
    RouteSegment {
        id: id.into(),
        from: Position::new(from.0, from.1),
        to: Position::new(to.0, to.1),
        congestion,
    }
}

fn points(coords: &[(f64, f64)]) -> Vec<Position> {
    coords.iter().map(|&(x, y)| Position::new(x, y)).collect()
}
