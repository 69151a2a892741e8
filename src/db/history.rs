//! Read-side views joined across workouts, exercises, entries and sets.
//!
//! Everything here is a pure read producing denormalized records that the
//! command layer renders or exports as-is.

use super::error::Result;
use super::exercises::Exercise;
use super::sets::{sets_for, WorkoutSet};
use super::workouts::{parse_timestamp, Workout};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use serde::Serialize;

const SELECT_WORKOUT: &str = "SELECT id, date, name FROM workouts WHERE id = ?1";
const SELECT_WORKOUT_ENTRIES: &str = "SELECT we.id, we.order_index, we.exercise_id, e.name
    FROM workout_exercises we
    JOIN exercises e ON e.id = we.exercise_id
    WHERE we.workout_id = ?1
    ORDER BY we.order_index ASC";
const SELECT_RECENT: &str = "SELECT w.id, w.date, w.name,
        COUNT(DISTINCT we.id) AS exercise_count,
        COUNT(s.id) AS set_count
    FROM workouts w
    LEFT JOIN workout_exercises we ON we.workout_id = w.id
    LEFT JOIN sets s ON s.workout_exercise_id = we.id
    GROUP BY w.id
    ORDER BY w.date DESC, w.id DESC
    LIMIT ?1";
const SELECT_LATEST_WORKOUT_IDS: &str = "SELECT id FROM workouts ORDER BY date DESC, id DESC LIMIT ?1";
const SELECT_EXERCISE_SESSIONS: &str = "SELECT w.id, we.id, w.date
    FROM workout_exercises we
    JOIN workouts w ON w.id = we.workout_id
    WHERE we.exercise_id = ?1
    ORDER BY w.date DESC, w.id DESC, we.order_index ASC";
const SELECT_LAST_SESSION: &str = "SELECT w.id, we.id, w.date
    FROM workout_exercises we
    JOIN workouts w ON w.id = we.workout_id
    WHERE we.exercise_id = ?1 AND w.id != ?2
    ORDER BY w.date DESC, w.id DESC, we.order_index ASC
    LIMIT 1";

/// One weight/reps entry inside a session summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SetSummary {
    pub set_index: i64,
    pub weight: f64,
    pub reps: i64,
}

impl From<&WorkoutSet> for SetSummary {
    fn from(set: &WorkoutSet) -> Self {
        SetSummary {
            set_index: set.set_index,
            weight: set.weight,
            reps: set.reps,
        }
    }
}

/// An exercise's appearance in one workout, with its sets.
///
/// Used both for full exercise history and for the "last session" hint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseSession {
    pub workout_id: i64,
    pub workout_exercise_id: i64,
    pub date: DateTime<Utc>,
    pub sets: Vec<SetSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutExerciseDetail {
    pub workout_exercise_id: i64,
    pub order_index: i64,
    pub exercise: Exercise,
    pub sets: Vec<WorkoutSet>,
    /// Most recent other workout containing this exercise
    pub last_session: Option<ExerciseSession>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutDetail {
    #[serde(flatten)]
    pub workout: Workout,
    pub exercises: Vec<WorkoutExerciseDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentWorkout {
    #[serde(flatten)]
    pub workout: Workout,
    pub exercise_count: i64,
    pub set_count: i64,
}

pub struct History<'a> {
    conn: &'a Connection,
}

impl<'a> History<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// The workout with its entries in order, each carrying its sets and the
    /// previous session for that exercise. `None` for an unknown id.
    pub fn workout_detail(&self, workout_id: i64) -> Result<Option<WorkoutDetail>> {
        workout_detail(self.conn, workout_id)
    }

    /// Newest workouts first, with entry and set counts.
    pub fn recent_workouts(&self, limit: usize) -> Result<Vec<RecentWorkout>> {
        let mut stmt = self.conn.prepare(SELECT_RECENT)?;
        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok(RecentWorkout {
                    workout: Workout::from_row(row)?,
                    exercise_count: row.get(3)?,
                    set_count: row.get(4)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
    }

    /// The `limit` newest workouts, fully expanded.
    pub fn workout_history(&self, limit: usize) -> Result<Vec<WorkoutDetail>> {
        let mut stmt = self.conn.prepare(SELECT_LATEST_WORKOUT_IDS)?;
        let ids = stmt
            .query_map(params![limit as i64], |row| row.get::<_, i64>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut history = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(detail) = workout_detail(self.conn, id)? {
                history.push(detail);
            }
        }
        Ok(history)
    }

    /// Every workout the exercise appears in, newest first.
    pub fn exercise_history(&self, exercise_id: i64) -> Result<Vec<ExerciseSession>> {
        let mut stmt = self.conn.prepare(SELECT_EXERCISE_SESSIONS)?;
        let sessions = stmt
            .query_map(params![exercise_id], session_header)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        sessions
            .into_iter()
            .map(|(workout_id, workout_exercise_id, date)| with_sets(self.conn, workout_id, workout_exercise_id, date))
            .collect()
    }

    /// Most recent appearance of the exercise outside `exclude_workout_id`.
    pub fn last_session(&self, exercise_id: i64, exclude_workout_id: Option<i64>) -> Result<Option<ExerciseSession>> {
        last_session(self.conn, exercise_id, exclude_workout_id)
    }
}

pub(crate) fn workout_detail(conn: &Connection, workout_id: i64) -> Result<Option<WorkoutDetail>> {
    let Some(workout) = conn.query_row(SELECT_WORKOUT, params![workout_id], Workout::from_row).optional()? else {
        return Ok(None);
    };

    let mut stmt = conn.prepare_cached(SELECT_WORKOUT_ENTRIES)?;
    let entries = stmt
        .query_map(params![workout_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, i64>(1)?,
                Exercise {
                    id: row.get(2)?,
                    name: row.get(3)?,
                },
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    drop(stmt);

    let mut exercises = Vec::with_capacity(entries.len());
    for (workout_exercise_id, order_index, exercise) in entries {
        let sets = sets_for(conn, workout_exercise_id)?;
        let last_session = last_session(conn, exercise.id, Some(workout_id))?;
        exercises.push(WorkoutExerciseDetail {
            workout_exercise_id,
            order_index,
            exercise,
            sets,
            last_session,
        });
    }

    Ok(Some(WorkoutDetail { workout, exercises }))
}

pub(crate) fn last_session(
    conn: &Connection,
    exercise_id: i64,
    exclude_workout_id: Option<i64>,
) -> Result<Option<ExerciseSession>> {
    let header = conn
        .query_row(SELECT_LAST_SESSION, params![exercise_id, exclude_workout_id.unwrap_or(-1)], session_header)
        .optional()?;

    match header {
        Some((workout_id, workout_exercise_id, date)) => {
            Ok(Some(with_sets(conn, workout_id, workout_exercise_id, date)?))
        }
        None => Ok(None),
    }
}

fn session_header(row: &Row) -> rusqlite::Result<(i64, i64, DateTime<Utc>)> {
    Ok((row.get(0)?, row.get(1)?, parse_timestamp(2, row.get(2)?)?))
}

fn with_sets(conn: &Connection, workout_id: i64, workout_exercise_id: i64, date: DateTime<Utc>) -> Result<ExerciseSession> {
    let sets = sets_for(conn, workout_exercise_id)?.iter().map(SetSummary::from).collect();
    Ok(ExerciseSession {
        workout_id,
        workout_exercise_id,
        date,
        sets,
    })
}
