//! RAILOPS dashboard backend.
//!
//! Wires the position simulator and the review pipeline into one
//! `Dashboard` state object driven by serialized frontend commands. The
//! map animation runs on its own thread; everything else is synchronous.

pub mod animation;
pub mod dashboard;
pub mod error;

pub use animation::AnimationLoop;
pub use dashboard::{BoardKind, Dashboard, DashboardCommand, DashboardResponse};
pub use error::{AppError, AppResult};
pub use railops_core as core;
