//! Exercise catalogue.
//!
//! Exercise names are unique after trimming. Storage is case-sensitive while
//! listings sort case-insensitively. Renaming onto a name that is already
//! taken merges the two exercises: every workout entry of the renamed
//! exercise is repointed at the existing one and the renamed row disappears.
//!
//! The store assumes a single writer. [`ensure_exercise`] is an
//! insert-or-ignore followed by a lookup by name; with one writer the lookup
//! always finds the row.

use super::error::{Result, StoreError};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

const INSERT_OR_IGNORE: &str = "INSERT OR IGNORE INTO exercises (name) VALUES (?1)";
const SELECT_BY_NAME: &str = "SELECT id, name FROM exercises WHERE name = ?1";
const SELECT_BY_ID: &str = "SELECT id, name FROM exercises WHERE id = ?1";
const SELECT_ALL: &str = "SELECT id, name FROM exercises ORDER BY name COLLATE NOCASE ASC";
const UPDATE_NAME: &str = "UPDATE exercises SET name = ?2 WHERE id = ?1";
const REPOINT_LINKS: &str = "UPDATE workout_exercises SET exercise_id = ?1 WHERE exercise_id = ?2";
const DELETE_SETS: &str =
    "DELETE FROM sets WHERE workout_exercise_id IN (SELECT id FROM workout_exercises WHERE exercise_id = ?1)";
const DELETE_LINKS: &str = "DELETE FROM workout_exercises WHERE exercise_id = ?1";
const DELETE_EXERCISE: &str = "DELETE FROM exercises WHERE id = ?1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: i64,
    pub name: String,
}

impl Exercise {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Exercise {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }
}

/// Result of [`Exercises::rename`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// The exercise kept its id and now carries the new name.
    Renamed(Exercise),
    /// The name belonged to another exercise; `from` was folded into `into`
    /// and no longer exists.
    Merged { from: i64, into: Exercise },
}

impl RenameOutcome {
    /// The exercise that carries the requested name after the call.
    pub fn exercise(&self) -> &Exercise {
        match self {
            RenameOutcome::Renamed(exercise) => exercise,
            RenameOutcome::Merged { into, .. } => into,
        }
    }

    pub fn into_exercise(self) -> Exercise {
        match self {
            RenameOutcome::Renamed(exercise) => exercise,
            RenameOutcome::Merged { into, .. } => into,
        }
    }

    pub fn is_merge(&self) -> bool {
        matches!(self, RenameOutcome::Merged { .. })
    }
}

pub struct Exercises<'a> {
    conn: &'a mut Connection,
}

impl<'a> Exercises<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Self { conn }
    }

    /// Finds the exercise with this (trimmed) name, creating it if needed.
    pub fn ensure(&mut self, name: &str) -> Result<Exercise> {
        ensure_exercise(self.conn, name)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Exercise>> {
        get_exercise(self.conn, id)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<Exercise>> {
        Ok(self.conn.query_row(SELECT_BY_NAME, params![name.trim()], Exercise::from_row).optional()?)
    }

    /// Every exercise, sorted by name ignoring case.
    pub fn list(&mut self) -> Result<Vec<Exercise>> {
        let mut stmt = self.conn.prepare(SELECT_ALL)?;
        let exercises = stmt.query_map([], Exercise::from_row)?.collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(exercises)
    }

    /// Renames an exercise, merging it into an existing one on a name clash.
    ///
    /// After a merge the renamed id is gone; callers must continue with the
    /// id of [`RenameOutcome::exercise`].
    pub fn rename(&mut self, id: i64, name: &str) -> Result<RenameOutcome> {
        let cleaned = validate_name(name)?;

        let tx = self.conn.transaction()?;
        if get_exercise(&tx, id)?.is_none() {
            return Err(StoreError::ExerciseNotFound(id));
        }

        let existing = tx.query_row(SELECT_BY_NAME, params![cleaned], Exercise::from_row).optional()?;
        if let Some(target) = existing.filter(|target| target.id != id) {
            let moved = tx.execute(REPOINT_LINKS, params![target.id, id])?;
            tx.execute(DELETE_EXERCISE, params![id])?;
            tx.commit()?;
            tracing::debug!(from = id, into = target.id, moved, "exercise merged");
            return Ok(RenameOutcome::Merged { from: id, into: target });
        }

        tx.execute(UPDATE_NAME, params![id, cleaned])?;
        let renamed = get_exercise(&tx, id)?.ok_or(StoreError::ExerciseNotFound(id))?;
        tx.commit()?;
        tracing::debug!(exercise_id = id, "exercise renamed");
        Ok(RenameOutcome::Renamed(renamed))
    }

    /// Deletes the exercise everywhere: every set and entry in every workout
    /// that used it, then the exercise itself.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        let sets = tx.execute(DELETE_SETS, params![id])?;
        let links = tx.execute(DELETE_LINKS, params![id])?;
        tx.execute(DELETE_EXERCISE, params![id])?;
        tx.commit()?;
        tracing::debug!(exercise_id = id, links, sets, "exercise deleted");
        Ok(())
    }
}

/// Find-or-insert by trimmed name. Runs on whatever connection or
/// transaction it is given.
pub(crate) fn ensure_exercise(conn: &Connection, name: &str) -> Result<Exercise> {
    let cleaned = validate_name(name)?;
    conn.execute(INSERT_OR_IGNORE, params![cleaned])?;
    conn.query_row(SELECT_BY_NAME, params![cleaned], Exercise::from_row)
        .optional()?
        .ok_or_else(|| StoreError::ExerciseNotLoaded(cleaned.to_string()))
}

pub(crate) fn get_exercise(conn: &Connection, id: i64) -> Result<Option<Exercise>> {
    Ok(conn.query_row(SELECT_BY_ID, params![id], Exercise::from_row).optional()?)
}

fn validate_name(name: &str) -> Result<&str> {
    let cleaned = name.trim();
    if cleaned.is_empty() {
        return Err(StoreError::EmptyExerciseName);
    }
    Ok(cleaned)
}
