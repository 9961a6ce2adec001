//! Core types and definitions for the RAILOPS dashboard.
//!
//! This crate defines the vocabulary shared across all other crates:
//! routes and positions, record structs, enums, map commands, snapshots,
//! events, and constants. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod records;
pub mod state;
pub mod types;
