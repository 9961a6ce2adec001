//! Map commands sent from the frontend to the position simulator.
//!
//! Commands are queued and applied at the next tick boundary, before
//! any movement happens on that tick.

use serde::{Deserialize, Serialize};

/// All map interactions that change simulator state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MapCommand {
    /// Resume marker animation.
    Play,
    /// Freeze markers where they are.
    Pause,
    /// Flip between playing and paused.
    ToggleAnimation,
    /// Show the detail panel for a train.
    SelectTrain { train_id: String },
    /// Close the detail panel.
    ClearSelection,
}
