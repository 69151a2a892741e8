//! Exercise entries within a workout.
//!
//! An entry links one exercise to one workout and carries its 1-based
//! position. Positions are assigned as `max + 1` and are not renumbered when
//! an entry is removed. Adding an exercise that is already in the workout
//! returns the existing entry.

use super::error::Result;
use super::exercises::{ensure_exercise, Exercise};
use super::history::{last_session, ExerciseSession};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::{Deserialize, Serialize};

const SELECT_EXISTING: &str = "SELECT id, workout_id, exercise_id, order_index
    FROM workout_exercises
    WHERE workout_id = ?1 AND exercise_id = ?2
    ORDER BY order_index ASC
    LIMIT 1";
const NEXT_ORDER_INDEX: &str = "SELECT COALESCE(MAX(order_index) + 1, 1) FROM workout_exercises WHERE workout_id = ?1";
const INSERT_LINK: &str = "INSERT INTO workout_exercises (workout_id, exercise_id, order_index) VALUES (?1, ?2, ?3)";
const SELECT_BY_ID: &str = "SELECT id, workout_id, exercise_id, order_index FROM workout_exercises WHERE id = ?1";
const SELECT_FOR_WORKOUT: &str = "SELECT id, workout_id, exercise_id, order_index
    FROM workout_exercises
    WHERE workout_id = ?1
    ORDER BY order_index ASC";
const DELETE_SETS: &str = "DELETE FROM sets WHERE workout_exercise_id = ?1";
const DELETE_LINK: &str = "DELETE FROM workout_exercises WHERE id = ?1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub id: i64,
    pub workout_id: i64,
    pub exercise_id: i64,
    pub order_index: i64,
}

impl WorkoutExercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(WorkoutExercise {
            id: row.get(0)?,
            workout_id: row.get(1)?,
            exercise_id: row.get(2)?,
            order_index: row.get(3)?,
        })
    }
}

/// Result of [`WorkoutExercises::add`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddedExercise {
    pub entry: WorkoutExercise,
    pub exercise: Exercise,
    /// `false` when the exercise was already part of the workout
    pub created: bool,
    /// Most recent other workout with this exercise, for reference while logging
    pub last_session: Option<ExerciseSession>,
}

pub struct WorkoutExercises<'a> {
    conn: &'a mut Connection,
}

impl<'a> WorkoutExercises<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Self { conn }
    }

    /// Adds an exercise (created on first use) to a workout.
    pub fn add(&mut self, workout_id: i64, exercise_name: &str) -> Result<AddedExercise> {
        let tx = self.conn.transaction()?;
        let exercise = ensure_exercise(&tx, exercise_name)?;

        let existing = tx
            .query_row(SELECT_EXISTING, params![workout_id, exercise.id], WorkoutExercise::from_row)
            .optional()?;

        let (entry, created) = match existing {
            Some(entry) => (entry, false),
            None => {
                let order_index: i64 = tx.query_row(NEXT_ORDER_INDEX, params![workout_id], |row| row.get(0))?;
                tx.execute(INSERT_LINK, params![workout_id, exercise.id, order_index])?;
                let entry = WorkoutExercise {
                    id: tx.last_insert_rowid(),
                    workout_id,
                    exercise_id: exercise.id,
                    order_index,
                };
                (entry, true)
            }
        };

        let last_session = last_session(&tx, exercise.id, Some(workout_id))?;
        tx.commit()?;

        tracing::debug!(workout_id, exercise_id = exercise.id, entry_id = entry.id, created, "exercise added to workout");
        Ok(AddedExercise {
            entry,
            exercise,
            created,
            last_session,
        })
    }

    /// Removes one entry and its sets. Other workouts are untouched.
    pub fn remove(&mut self, workout_exercise_id: i64) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_SETS, params![workout_exercise_id])?;
        tx.execute(DELETE_LINK, params![workout_exercise_id])?;
        tx.commit()?;
        tracing::debug!(entry_id = workout_exercise_id, "exercise removed from workout");
        Ok(())
    }

    pub fn get(&mut self, workout_exercise_id: i64) -> Result<Option<WorkoutExercise>> {
        Ok(self
            .conn
            .query_row(SELECT_BY_ID, params![workout_exercise_id], WorkoutExercise::from_row)
            .optional()?)
    }

    pub fn list_for_workout(&mut self, workout_id: i64) -> Result<Vec<WorkoutExercise>> {
        let mut stmt = self.conn.prepare(SELECT_FOR_WORKOUT)?;
        let entries = stmt
            .query_map(params![workout_id], WorkoutExercise::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(entries)
    }
}
