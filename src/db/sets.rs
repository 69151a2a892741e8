use super::error::Result;
use rusqlite::{params, Connection, Row};
use serde::{Deserialize, Serialize};

const NEXT_SET_INDEX: &str = "SELECT COALESCE(MAX(set_index) + 1, 1) FROM sets WHERE workout_exercise_id = ?1";
const INSERT_SET: &str = "INSERT INTO sets (workout_exercise_id, set_index, weight, reps) VALUES (?1, ?2, ?3, ?4)";
const SELECT_FOR_LINK: &str = "SELECT id, workout_exercise_id, set_index, weight, reps
    FROM sets
    WHERE workout_exercise_id = ?1
    ORDER BY set_index ASC";

/// One recorded weight/reps attempt. Sets are never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSet {
    pub id: i64,
    pub workout_exercise_id: i64,
    /// 1-based position, `max + 1` of the sets present at insert time
    pub set_index: i64,
    pub weight: f64,
    pub reps: i64,
}

impl WorkoutSet {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(WorkoutSet {
            id: row.get(0)?,
            workout_exercise_id: row.get(1)?,
            set_index: row.get(2)?,
            weight: row.get(3)?,
            reps: row.get(4)?,
        })
    }
}

pub struct Sets<'a> {
    conn: &'a mut Connection,
}

impl<'a> Sets<'a> {
    pub fn new(conn: &'a mut Connection) -> Self {
        Self { conn }
    }

    /// Appends a set to a workout entry.
    ///
    /// Any finite weight and any rep count are accepted. Fails with a
    /// foreign key error if the entry does not exist.
    pub fn add(&mut self, workout_exercise_id: i64, weight: f64, reps: i64) -> Result<WorkoutSet> {
        let tx = self.conn.transaction()?;
        let set_index: i64 = tx.query_row(NEXT_SET_INDEX, params![workout_exercise_id], |row| row.get(0))?;
        tx.execute(INSERT_SET, params![workout_exercise_id, set_index, weight, reps])?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(WorkoutSet {
            id,
            workout_exercise_id,
            set_index,
            weight,
            reps,
        })
    }

    pub fn list(&mut self, workout_exercise_id: i64) -> Result<Vec<WorkoutSet>> {
        sets_for(self.conn, workout_exercise_id)
    }
}

/// Sets of one workout entry in `set_index` order.
pub(crate) fn sets_for(conn: &Connection, workout_exercise_id: i64) -> Result<Vec<WorkoutSet>> {
    let mut stmt = conn.prepare_cached(SELECT_FOR_LINK)?;
    let sets = stmt
        .query_map(params![workout_exercise_id], WorkoutSet::from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(sets)
}
