//! Application-level errors.

use thiserror::Error;

use railops_review::ReviewError;
use railops_sim::SimError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    /// A thread panicked while holding this lock.
    #[error("{0} lock poisoned")]
    Poisoned(&'static str),

    #[error("failed to spawn animation thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// The animation thread panicked before it could be joined.
    #[error("animation thread panicked")]
    LoopPanicked,

    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Review(#[from] ReviewError),
}
