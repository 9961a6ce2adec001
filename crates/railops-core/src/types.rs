//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_ROUTE_WAYPOINTS, TICK_INTERVAL};
use crate::error::RouteError;

/// 2D position on the network map (map units, y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Direction of travel in degrees, `atan2(dy, dx)` (0 = +x, 90 = +y).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub degrees: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each animated tick).
    pub tick: u64,
    /// Elapsed animated time in seconds.
    pub elapsed_secs: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_vec(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.to_vec().distance(other.to_vec())
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl Heading {
    /// Heading of the segment `from -> to`.
    pub fn between(from: DVec2, to: DVec2) -> Self {
        let d = to - from;
        Self {
            degrees: d.y.atan2(d.x).to_degrees(),
        }
    }
}

impl SimTime {
    /// Advance by one tick of `dt_secs`.
    pub fn advance(&mut self, dt_secs: f64) {
        self.tick += 1;
        self.elapsed_secs += dt_secs;
    }

    /// Advance by one tick at the default interval.
    pub fn advance_default(&mut self) {
        self.advance(TICK_INTERVAL.as_secs_f64());
    }
}

/// A closed polyline a train loops along forever.
///
/// Always holds at least two finite waypoints; the last waypoint connects
/// back to the first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    waypoints: Vec<DVec2>,
}

impl Route {
    pub fn new(waypoints: Vec<DVec2>) -> Result<Self, RouteError> {
        if waypoints.len() < MIN_ROUTE_WAYPOINTS {
            return Err(RouteError::TooShort {
                len: waypoints.len(),
                min: MIN_ROUTE_WAYPOINTS,
            });
        }
        if let Some(index) = waypoints.iter().position(|w| !w.is_finite()) {
            return Err(RouteError::NonFinite { index });
        }
        Ok(Self { waypoints })
    }

    /// Build a route from `(x, y)` pairs.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self, RouteError> {
        Self::new(points.iter().map(|&(x, y)| DVec2::new(x, y)).collect())
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Routes are never empty; provided for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    pub fn waypoints(&self) -> &[DVec2] {
        &self.waypoints
    }

    /// Waypoint at `index`, wrapping around the loop.
    pub fn waypoint(&self, index: usize) -> DVec2 {
        self.waypoints[index % self.waypoints.len()]
    }

    /// Index following `index` on the loop.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.waypoints.len()
    }

    /// Endpoints of the segment that starts at `index`.
    pub fn segment(&self, index: usize) -> (DVec2, DVec2) {
        (self.waypoint(index), self.waypoint(self.next_index(index)))
    }
}

impl<'de> Deserialize<'de> for Route {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            waypoints: Vec<DVec2>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Route::new(raw.waypoints).map_err(serde::de::Error::custom)
    }
}
