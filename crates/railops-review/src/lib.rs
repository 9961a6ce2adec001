//! Filter-sort-review pipeline for RAILOPS.
//!
//! Derives filtered, ordered views of train rows, incidents and AI
//! recommendations from typed criteria; applies one-directional status
//! transitions; computes aggregate statistics; and manages what-if
//! scenario drafts. Everything here is synchronous and timer-free.

pub mod board;
pub mod criteria;
pub mod error;
pub mod filter;
pub mod fixtures;
pub mod record;
pub mod scenario;
pub mod sort;
pub mod stats;
pub mod status;

pub use board::ReviewBoard;
pub use error::{ReviewError, ReviewResult};
pub use railops_core as core;
pub use record::Reviewable;
