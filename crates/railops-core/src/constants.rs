//! Dashboard constants and tuning parameters.

use std::time::Duration;

// --- Map animation ---

/// Wall-clock interval between two animation ticks (ms).
pub const TICK_INTERVAL_MS: u64 = 1000;

/// Wall-clock interval between two animation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Fraction of a segment covered by one tick.
pub const PROGRESS_FRACTION: f64 = 0.3;

/// Remaining distance (map units) below which a waypoint counts as reached.
pub const ARRIVAL_THRESHOLD: f64 = 5.0;

/// Minimum number of waypoints in a route.
pub const MIN_ROUTE_WAYPOINTS: usize = 2;

// --- Review ---

/// Selection label meaning "no constraint" in a categorical filter.
pub const SELECTION_ALL: &str = "all";

// --- Scenario builder ---

/// Time a what-if scenario stays `Running` before it completes.
pub const SCENARIO_RUN_DURATION: Duration = Duration::from_secs(3);
