//! Animation loop thread. Ticks the position simulator on a fixed cadence.
//!
//! The simulator is shared with the dashboard, which queues map commands
//! directly on it. The thread only receives a stop signal over its channel.
//! Every tick's snapshot is stored in shared state for synchronous polling.

use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use railops_core::commands::MapCommand;
use railops_core::state::MapSnapshot;
use railops_sim::PositionSimulator;

use crate::error::{AppError, AppResult};

/// Signals sent to the animation thread.
#[derive(Debug)]
pub enum LoopSignal {
    /// Exit after the current tick, if any.
    Stop,
}

struct Running {
    stop_tx: mpsc::Sender<LoopSignal>,
    handle: JoinHandle<()>,
}

/// Cancellable handle on the animation thread.
pub struct AnimationLoop {
    simulator: Arc<Mutex<PositionSimulator>>,
    latest_snapshot: Arc<Mutex<Option<MapSnapshot>>>,
    interval: Duration,
    running: Option<Running>,
}

impl AnimationLoop {
    /// Wrap a simulator. The loop is not started; the latest snapshot holds
    /// the simulator's initial state.
    pub fn new(simulator: PositionSimulator) -> Self {
        let interval = simulator.config().tick_interval();
        let initial = simulator.snapshot();
        Self {
            simulator: Arc::new(Mutex::new(simulator)),
            latest_snapshot: Arc::new(Mutex::new(Some(initial))),
            interval,
            running: None,
        }
    }

    /// Spawn the animation thread. Returns `false` if it was already
    /// running. The first tick fires one interval after start.
    pub fn start(&mut self) -> AppResult<bool> {
        if self.running.is_some() {
            debug!("animation loop already running");
            return Ok(false);
        }

        let (stop_tx, stop_rx) = mpsc::channel::<LoopSignal>();
        let simulator = Arc::clone(&self.simulator);
        let latest = Arc::clone(&self.latest_snapshot);
        let interval = self.interval;

        let handle = std::thread::Builder::new()
            .name("railops-animation".into())
            .spawn(move || run_loop(&simulator, &latest, &stop_rx, interval))?;

        self.running = Some(Running { stop_tx, handle });
        info!("animation loop started ({} ms interval)", interval.as_millis());
        Ok(true)
    }

    /// Signal the thread and wait for it to exit. Once this returns no
    /// further tick fires. Returns `false` if the loop was not running.
    pub fn stop(&mut self) -> AppResult<bool> {
        let Some(Running { stop_tx, handle }) = self.running.take() else {
            return Ok(false);
        };
        // A send error means the thread already exited.
        let _ = stop_tx.send(LoopSignal::Stop);
        handle.join().map_err(|_| AppError::LoopPanicked)?;
        info!("animation loop stopped");
        Ok(true)
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Queue a map command. A running loop applies it at its next tick; a
    /// stopped loop applies it now and publishes the resulting state.
    pub fn send(&self, command: MapCommand) -> AppResult<()> {
        let running = self.is_running();
        let applied = self.with_simulator(|sim| {
            sim.queue_command(command);
            if running {
                None
            } else {
                sim.process_commands();
                Some(sim.snapshot())
            }
        })?;
        match applied {
            Some(snapshot) => self.publish(snapshot),
            None => Ok(()),
        }
    }

    /// Run `f` with the simulator locked.
    pub fn with_simulator<T>(&self, f: impl FnOnce(&mut PositionSimulator) -> T) -> AppResult<T> {
        let mut sim = self
            .simulator
            .lock()
            .map_err(|_| AppError::Poisoned("simulator"))?;
        Ok(f(&mut sim))
    }

    /// Tick once on the caller's thread and publish the snapshot.
    pub fn step(&self) -> AppResult<MapSnapshot> {
        let snapshot = self.with_simulator(PositionSimulator::tick)?;
        self.publish(snapshot.clone())?;
        Ok(snapshot)
    }

    /// Snapshot of the most recent tick.
    pub fn latest_snapshot(&self) -> AppResult<Option<MapSnapshot>> {
        let lock = self
            .latest_snapshot
            .lock()
            .map_err(|_| AppError::Poisoned("snapshot"))?;
        Ok(lock.clone())
    }

    fn publish(&self, snapshot: MapSnapshot) -> AppResult<()> {
        let mut lock = self
            .latest_snapshot
            .lock()
            .map_err(|_| AppError::Poisoned("snapshot"))?;
        *lock = Some(snapshot);
        Ok(())
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            warn!("animation loop did not shut down cleanly: {err}");
        }
    }
}

/// The animation loop. Runs until a stop signal or channel disconnect.
fn run_loop(
    simulator: &Mutex<PositionSimulator>,
    latest_snapshot: &Mutex<Option<MapSnapshot>>,
    stop_rx: &mpsc::Receiver<LoopSignal>,
    interval: Duration,
) {
    let mut next_tick_time = Instant::now() + interval;

    loop {
        // 1. Wait for the next tick, waking early on stop
        let timeout = next_tick_time.saturating_duration_since(Instant::now());
        match stop_rx.recv_timeout(timeout) {
            Ok(LoopSignal::Stop) | Err(RecvTimeoutError::Disconnected) => return,
            Err(RecvTimeoutError::Timeout) => {}
        }

        // 2. Advance one tick (the simulator handles pause internally)
        let snapshot = match simulator.lock() {
            Ok(mut sim) => sim.tick(),
            Err(_) => {
                warn!("simulator lock poisoned, animation loop exiting");
                return;
            }
        };
        debug!("tick {} ({} trains)", snapshot.time.tick, snapshot.trains.len());

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Schedule the next tick
        next_tick_time += interval;
        let now = Instant::now();
        if now > next_tick_time + interval * 2 {
            // Too far behind, reset to avoid a catch-up burst
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use railops_sim::SimConfig;

    fn slow_loop() -> AnimationLoop {
        let config = SimConfig {
            tick_interval_ms: 60_000,
            ..Default::default()
        };
        AnimationLoop::new(PositionSimulator::default_map(config).unwrap())
    }

    #[test]
    fn test_new_loop_is_idle_with_initial_snapshot() {
        let anim = slow_loop();
        assert!(!anim.is_running());
        let snap = anim.latest_snapshot().unwrap().unwrap();
        assert_eq!(snap.time.tick, 0);
        assert_eq!(snap.trains.len(), 4);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut anim = slow_loop();
        assert!(anim.start().unwrap());
        assert!(!anim.start().unwrap());
        assert!(anim.is_running());
        assert!(anim.stop().unwrap());
        assert!(!anim.stop().unwrap());
        assert!(!anim.is_running());
    }

    #[test]
    fn test_step_publishes_snapshot() {
        let anim = slow_loop();
        let snap = anim.step().unwrap();
        assert_eq!(snap.time.tick, 1);
        assert_eq!(anim.latest_snapshot().unwrap().unwrap(), snap);
    }

    #[test]
    fn test_send_while_stopped_applies_immediately() {
        let anim = slow_loop();
        anim.send(MapCommand::Pause).unwrap();
        assert!(!anim.with_simulator(|sim| sim.is_animating()).unwrap());
        assert!(!anim.latest_snapshot().unwrap().unwrap().animating);

        let snap = anim.step().unwrap();
        assert!(!snap.animating);
        assert_eq!(snap.time.tick, 0);
    }

    #[test]
    fn test_send_while_running_waits_for_tick() {
        let mut anim = slow_loop();
        anim.start().unwrap();
        anim.send(MapCommand::Pause).unwrap();
        assert!(anim.with_simulator(|sim| sim.is_animating()).unwrap());
        anim.stop().unwrap();

        let snap = anim.step().unwrap();
        assert!(!snap.animating);
    }

    #[test]
    fn test_loop_ticks_until_stopped() {
        let config = SimConfig {
            tick_interval_ms: 5,
            ..Default::default()
        };
        let mut anim = AnimationLoop::new(PositionSimulator::default_map(config).unwrap());
        anim.start().unwrap();
        std::thread::sleep(Duration::from_millis(200));
        anim.stop().unwrap();

        let ticked = anim.with_simulator(|sim| sim.time().tick).unwrap();
        assert!(ticked > 0);

        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(anim.with_simulator(|sim| sim.time().tick).unwrap(), ticked);
        assert_eq!(anim.latest_snapshot().unwrap().unwrap().time.tick, ticked);
    }
}
