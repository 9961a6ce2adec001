//! Status state machines.
//!
//! Pure transition rules per status enum, plus the collection-level
//! `set_status` that applies one transition to one record.

use std::fmt::Debug;

use log::{debug, warn};
use serde::Serialize;

use railops_core::enums::{IncidentStatus, RecommendationStatus, ScenarioStatus, TrainStatus};

use crate::criteria::label;
use crate::error::{ReviewError, ReviewResult};
use crate::record::Reviewable;

/// Transition rules for a status enum.
pub trait StatusMachine: Copy + Eq + Ord + Debug + Serialize + 'static {
    /// Every value, in declaration order.
    const ALL: &'static [Self];

    /// Whether a record in `self` may move to `to`.
    fn can_transition(self, to: Self) -> bool;

    /// No transition leaves a terminal status.
    fn is_terminal(self) -> bool {
        Self::ALL.iter().all(|&to| !self.can_transition(to))
    }
}

impl StatusMachine for RecommendationStatus {
    const ALL: &'static [Self] = &[
        RecommendationStatus::Pending,
        RecommendationStatus::Accepted,
        RecommendationStatus::Rejected,
        RecommendationStatus::Implemented,
    ];

    fn can_transition(self, to: Self) -> bool {
        matches!(
            (self, to),
            (
                RecommendationStatus::Pending,
                RecommendationStatus::Accepted | RecommendationStatus::Rejected
            )
        )
    }
}

impl StatusMachine for IncidentStatus {
    const ALL: &'static [Self] = &[
        IncidentStatus::Active,
        IncidentStatus::Investigating,
        IncidentStatus::Resolved,
        IncidentStatus::Closed,
    ];

    /// Strictly forward; skipping ahead is allowed.
    fn can_transition(self, to: Self) -> bool {
        to > self
    }
}

impl StatusMachine for ScenarioStatus {
    const ALL: &'static [Self] = &[
        ScenarioStatus::Draft,
        ScenarioStatus::Running,
        ScenarioStatus::Completed,
    ];

    fn can_transition(self, to: Self) -> bool {
        matches!(
            (self, to),
            (ScenarioStatus::Draft, ScenarioStatus::Running)
                | (ScenarioStatus::Running, ScenarioStatus::Completed)
        )
    }
}

impl StatusMachine for TrainStatus {
    const ALL: &'static [Self] = &[
        TrainStatus::OnTime,
        TrainStatus::Delayed,
        TrainStatus::Early,
        TrainStatus::Cancelled,
    ];

    // Running statuses move freely; a cancelled service stays cancelled.
    fn can_transition(self, to: Self) -> bool {
        self != to && self != TrainStatus::Cancelled
    }
}

/// Check a single transition, naming the record in the error.
pub fn check_transition<S: StatusMachine>(id: &str, from: S, to: S) -> ReviewResult<()> {
    if from.can_transition(to) {
        Ok(())
    } else {
        Err(ReviewError::InvalidTransition {
            id: id.to_string(),
            from: label(&from),
            to: label(&to),
        })
    }
}

/// A copy of `records` with record `id` moved to `status`.
///
/// Exactly one record changes. Unknown ids and transitions the record's
/// current status does not allow are errors; `records` is never modified.
pub fn set_status<R: Reviewable>(records: &[R], id: &str, status: R::Status) -> ReviewResult<Vec<R>> {
    let Some(index) = records.iter().position(|r| r.id() == id) else {
        warn!("status change for unknown record {id}");
        return Err(ReviewError::NotFound { id: id.to_string() });
    };

    let from = records[index].status();
    if let Err(err) = check_transition(id, from, status) {
        warn!("{err}");
        return Err(err);
    }

    let mut updated = records.to_vec();
    updated[index].set_status(status);
    debug!("record {id}: {} -> {}", label(&from), label(&status));
    Ok(updated)
}
