//! Errors raised while validating core data.

use thiserror::Error;

/// Reasons a waypoint list cannot form a route.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    /// Fewer waypoints than a segment needs.
    #[error("route has {len} waypoint(s), at least {min} are required")]
    TooShort { len: usize, min: usize },

    /// A coordinate is NaN or infinite.
    #[error("waypoint {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}
