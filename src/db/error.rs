use crate::libs::messages::Message;
use thiserror::Error;

/// Failures surfaced by the persistence layer.
///
/// Lookups of missing ids are not errors; they come back as `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Exercise name was empty after trimming.
    #[error("{}", Message::ExerciseNameEmpty)]
    EmptyExerciseName,

    /// The exercise row was not found right after its own find-or-insert.
    #[error("{}", Message::ExerciseNotLoaded(.0.clone()))]
    ExerciseNotLoaded(String),

    /// Rename target does not exist.
    #[error("{}", Message::ExerciseNotFound(*.0))]
    ExerciseNotFound(i64),

    /// Any statement failure: constraint violation, I/O, bad data.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
