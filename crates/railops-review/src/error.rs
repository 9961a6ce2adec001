//! Review pipeline errors.

use thiserror::Error;

/// Result type for review operations.
pub type ReviewResult<T> = Result<T, ReviewError>;

/// Errors that can occur while filtering, reviewing or building scenarios.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReviewError {
    /// No record with this id in the collection.
    #[error("record {id} not found")]
    NotFound { id: String },

    /// The record's current status does not allow this transition.
    #[error("record {id} cannot move from {from} to {to}")]
    InvalidTransition { id: String, from: String, to: String },

    /// Two records share an id.
    #[error("duplicate record id {0}")]
    DuplicateId(String),

    /// A filter selection names a value outside the field's enumeration.
    #[error("unknown value '{value}' for filter '{field}'")]
    UnknownFilterValue { field: String, value: String },

    /// The record kind has no filter with this key.
    #[error("unknown filter '{0}'")]
    UnknownFilterKey(String),

    /// A scenario action needs a draft but none is open.
    #[error("no scenario draft is open")]
    NoDraft,

    /// Drafts cannot be saved without a name.
    #[error("scenario name is required")]
    MissingScenarioName,

    /// A parameter is missing a required field.
    #[error("scenario parameter is missing its {0}")]
    IncompleteParameter(&'static str),

    #[error("scenario parameter {0} not found")]
    ParameterNotFound(String),

    #[error("scenario {0} not found")]
    ScenarioNotFound(String),
}
