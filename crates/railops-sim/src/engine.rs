//! Position simulator engine.
//!
//! `PositionSimulator` owns the hecs world of train markers, processes map
//! commands, runs the movement system, and produces `MapSnapshot`s.
//! Completely headless (no timer, no thread), so tests can drive `tick()`
//! deterministically; wall-clock cadence belongs to the caller.

use std::collections::VecDeque;
use std::time::Duration;

use glam::DVec2;
use hecs::World;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use railops_core::commands::MapCommand;
use railops_core::components::{RouteProgress, TrainMarker};
use railops_core::constants::{ARRIVAL_THRESHOLD, PROGRESS_FRACTION, TICK_INTERVAL_MS};
use railops_core::enums::Interpolation;
use railops_core::events::SimEvent;
use railops_core::state::{MapSnapshot, NetworkView};
use railops_core::types::{Heading, Position, Route, SimTime};

use crate::error::{SimError, SimResult};
use crate::network;
use crate::systems;

/// Tuning for the simulator. Defaults reproduce the legacy map animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fraction of the current segment covered per tick.
    pub progress_fraction: f64,
    /// Remaining distance below which the next waypoint counts as reached.
    pub arrival_threshold: f64,
    /// Wall-clock interval between ticks (ms). Also the simulated dt.
    pub tick_interval_ms: u64,
    pub interpolation: Interpolation,
    /// Whether markers move from the first tick on.
    pub start_animating: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            progress_fraction: PROGRESS_FRACTION,
            arrival_threshold: ARRIVAL_THRESHOLD,
            tick_interval_ms: TICK_INTERVAL_MS,
            interpolation: Interpolation::default(),
            start_animating: true,
        }
    }
}

impl SimConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// Everything needed to place one train on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainSpec {
    pub marker: TrainMarker,
    /// Looping route, at least two waypoints.
    pub waypoints: Vec<Position>,
}

/// The position simulator. Owns the ECS world and all map state.
pub struct PositionSimulator {
    world: World,
    config: SimConfig,
    time: SimTime,
    animating: bool,
    selected: Option<String>,
    network: NetworkView,
    command_queue: VecDeque<MapCommand>,
    events: Vec<SimEvent>,
}

impl PositionSimulator {
    /// Create an empty simulator with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            config,
            time: SimTime::default(),
            animating: config.start_animating,
            selected: None,
            network: NetworkView::default(),
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Create a simulator and place every train. Fails on the first invalid
    /// route or duplicate id; nothing is returned in that case.
    pub fn with_trains(
        config: SimConfig,
        trains: impl IntoIterator<Item = TrainSpec>,
    ) -> SimResult<Self> {
        let mut sim = Self::new(config);
        for spec in trains {
            sim.spawn_train(spec)?;
        }
        info!("position simulator ready with {} train(s)", sim.train_count());
        Ok(sim)
    }

    /// The built-in network map with its four animated trains.
    pub fn default_map(config: SimConfig) -> SimResult<Self> {
        let mut sim = Self::with_trains(config, network::default_trains())?;
        sim.network = network::default_network();
        Ok(sim)
    }

    /// Place a train at waypoint 0 of its route.
    pub fn spawn_train(&mut self, spec: TrainSpec) -> SimResult<hecs::Entity> {
        let TrainSpec { marker, waypoints } = spec;

        if self.find_train(&marker.id).is_some() {
            return Err(SimError::DuplicateTrain(marker.id));
        }

        let route = Route::new(waypoints.iter().map(|p| p.to_vec()).collect::<Vec<DVec2>>())
            .map_err(|source| SimError::InvalidRoute {
                train_id: marker.id.clone(),
                source,
            })?;

        let (start, next) = route.segment(0);
        debug!("spawning train {} with {} waypoints", marker.id, route.len());

        Ok(self.world.spawn((
            marker,
            Position::from(start),
            Heading::between(start, next),
            RouteProgress {
                route,
                current_index: 0,
            },
        )))
    }

    /// Replace the static station/segment layout.
    pub fn set_network(&mut self, network: NetworkView) {
        self.network = network;
    }

    /// Queue a map command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: MapCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = MapCommand>) {
        self.command_queue.extend(commands);
    }

    /// Apply queued commands, advance markers if animating, and return the
    /// resulting snapshot.
    pub fn tick(&mut self) -> MapSnapshot {
        self.process_commands();

        if self.animating {
            systems::movement::run(&mut self.world, &self.config, &mut self.events);
            self.time
                .advance(self.config.tick_interval().as_secs_f64());
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.animating,
            self.selected.as_deref(),
            events,
        )
    }

    /// Current state without advancing or applying commands.
    pub fn snapshot(&self) -> MapSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.animating,
            self.selected.as_deref(),
            Vec::new(),
        )
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn network(&self) -> &NetworkView {
        &self.network
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn train_count(&self) -> usize {
        self.world.query::<&TrainMarker>().iter().count()
    }

    fn find_train(&self, train_id: &str) -> Option<hecs::Entity> {
        self.world
            .query::<&TrainMarker>()
            .iter()
            .find(|(_, marker)| marker.id == train_id)
            .map(|(entity, _)| entity)
    }

    /// Apply queued commands now, without advancing markers.
    pub fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single map command.
    fn handle_command(&mut self, command: MapCommand) {
        match command {
            MapCommand::Play => self.animating = true,
            MapCommand::Pause => self.animating = false,
            MapCommand::ToggleAnimation => self.animating = !self.animating,
            MapCommand::SelectTrain { train_id } => {
                if self.find_train(&train_id).is_some() {
                    self.selected = Some(train_id);
                } else {
                    debug!("ignoring selection of unknown train {train_id}");
                }
            }
            MapCommand::ClearSelection => self.selected = None,
        }
    }
}
