//! Position simulator for the RAILOPS network map.
//!
//! Owns a hecs world of train markers, advances them along their looping
//! routes one tick at a time, and produces `MapSnapshot`s for the renderer.

pub mod engine;
pub mod error;
pub mod network;
pub mod systems;

pub use engine::{PositionSimulator, SimConfig, TrainSpec};
pub use error::SimError;
pub use railops_core as core;

#[cfg(test)]
mod tests;
