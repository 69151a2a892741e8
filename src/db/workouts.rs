//! Workout sessions.
//!
//! A workout is created when a session starts, can be renamed, and is either
//! deleted explicitly or discarded by [`Workouts::finalize`] when the session
//! ends without a single logged set. Deleting a workout removes its
//! exercise entries and their sets in the same transaction.

use super::error::Result;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

const INSERT_WORKOUT: &str = "INSERT INTO workouts (date, name) VALUES (?1, ?2)";
const UPDATE_NAME: &str = "UPDATE workouts SET name = ?2 WHERE id = ?1";
const SELECT_BY_ID: &str = "SELECT id, date, name FROM workouts WHERE id = ?1";
const DELETE_SETS: &str =
    "DELETE FROM sets WHERE workout_exercise_id IN (SELECT id FROM workout_exercises WHERE workout_id = ?1)";
const DELETE_LINKS: &str = "DELETE FROM workout_exercises WHERE workout_id = ?1";
const DELETE_WORKOUT: &str = "DELETE FROM workouts WHERE id = ?1";
const DELETE_UNLOGGED_LINKS: &str = "DELETE FROM workout_exercises
    WHERE workout_id = ?1
    AND id NOT IN (SELECT DISTINCT workout_exercise_id FROM sets)";
const COUNT_SETS: &str = "SELECT COUNT(s.id)
    FROM workout_exercises we
    JOIN sets s ON s.workout_exercise_id = we.id
    WHERE we.workout_id = ?1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: i64,
    /// Creation time, never changed after insert
    pub date: DateTime<Utc>,
    pub name: Option<String>,
}

impl Workout {
    pub(crate) fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Workout {
            id: row.get(0)?,
            date: parse_timestamp(1, row.get(1)?)?,
            name: row.get(2)?,
        })
    }
}

/// What [`Workouts::finalize`] did with the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinalizeOutcome {
    /// `false` when the workout had no sets and was deleted
    pub kept: bool,
    pub set_count: i64,
}

pub struct Workouts<'a> {
    conn: &'a mut Connection,
}

impl<'a> Workouts<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Self { conn }
    }

    /// Starts a new workout stamped with the current time.
    pub fn create(&mut self, name: Option<&str>) -> Result<Workout> {
        self.create_at(name, Utc::now())
    }

    /// Starts a new workout with an explicit timestamp.
    pub fn create_at(&mut self, name: Option<&str>, date: DateTime<Utc>) -> Result<Workout> {
        // Stored with millisecond precision, so the returned record matches a re-read.
        let date = date.trunc_subsecs(3);
        let name = normalize_name(name);
        self.conn.execute(INSERT_WORKOUT, params![format_timestamp(&date), name])?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(workout_id = id, "workout created");
        Ok(Workout { id, date, name })
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Workout>> {
        Ok(self.conn.query_row(SELECT_BY_ID, params![id], Workout::from_row).optional()?)
    }

    /// Sets the display name. Blank names clear it. `None` if the workout is gone.
    pub fn rename(&mut self, id: i64, name: Option<&str>) -> Result<Option<Workout>> {
        self.conn.execute(UPDATE_NAME, params![id, normalize_name(name)])?;
        self.get(id)
    }

    /// Deletes the workout with all of its exercise entries and sets.
    pub fn delete(&mut self, id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_SETS, params![id])?;
        tx.execute(DELETE_LINKS, params![id])?;
        tx.execute(DELETE_WORKOUT, params![id])?;
        tx.commit()?;
        tracing::debug!(workout_id = id, "workout deleted");
        Ok(())
    }

    /// End-of-session cleanup.
    ///
    /// Exercise entries without sets are dropped; if no sets remain at all
    /// the workout itself is deleted and reported as not kept.
    pub fn finalize(&mut self, id: i64) -> Result<FinalizeOutcome> {
        let tx = self.conn.transaction()?;
        let pruned = tx.execute(DELETE_UNLOGGED_LINKS, params![id])?;
        let set_count: i64 = tx.query_row(COUNT_SETS, params![id], |row| row.get(0))?;

        if set_count == 0 {
            tx.execute(DELETE_LINKS, params![id])?;
            tx.execute(DELETE_WORKOUT, params![id])?;
            tx.commit()?;
            tracing::debug!(workout_id = id, "empty workout discarded");
            return Ok(FinalizeOutcome { kept: false, set_count: 0 });
        }

        tx.commit()?;
        tracing::debug!(workout_id = id, pruned, set_count, "workout finalized");
        Ok(FinalizeOutcome { kept: true, set_count })
    }
}

fn normalize_name(name: Option<&str>) -> Option<String> {
    name.map(str::trim).filter(|n| !n.is_empty()).map(str::to_string)
}

pub(crate) fn format_timestamp(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn parse_timestamp(idx: usize, raw: String) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(&raw)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}
