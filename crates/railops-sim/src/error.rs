//! Simulator construction errors.

use thiserror::Error;

use railops_core::error::RouteError;

/// Result type for simulator setup.
pub type SimResult<T> = Result<T, SimError>;

/// Reasons a train cannot be placed on the map.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// The train's waypoints do not form a valid route.
    #[error("invalid route for train {train_id}: {source}")]
    InvalidRoute {
        train_id: String,
        #[source]
        source: RouteError,
    },

    /// Another marker already uses this id.
    #[error("train {0} is already on the map")]
    DuplicateTrain(String),
}
