//! Export of exercises and workout history, and import of exercise names.
//!
//! Exports render the output of the existing read operations; imports feed
//! names back through exercise find-or-create. Nothing here touches SQL
//! beyond those operations.
//!
//! ## Formats
//!
//! - **JSON**: exercises as `[{"name": "Squat"}, ...]`; history as workouts
//!   with nested `exercises[{name, sets[{set, weight, reps}]}]`
//! - **CSV**: one row per exercise, or one row per logged set
//!
//! ## Import
//!
//! A JSON array whose items are either plain strings or objects with a string
//! `name`. Other items and blank names are skipped. The whole import is one
//! transaction.

use crate::db::db::Db;
use crate::db::exercises::ensure_exercise;
use crate::db::history::WorkoutDetail;
use crate::db::workouts::format_timestamp;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportData {
    /// Every exercise name
    Exercises,
    /// The most recent workouts with their exercises and sets
    History,
}

#[derive(Debug, Serialize)]
pub struct ExerciseExport {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct SetExport {
    pub set: i64,
    pub weight: f64,
    pub reps: i64,
}

#[derive(Debug, Serialize)]
pub struct WorkoutExerciseExport {
    pub name: String,
    pub sets: Vec<SetExport>,
}

#[derive(Debug, Serialize)]
pub struct WorkoutExport {
    pub id: i64,
    pub date: String,
    pub name: Option<String>,
    pub exercises: Vec<WorkoutExerciseExport>,
}

impl From<&WorkoutDetail> for WorkoutExport {
    fn from(detail: &WorkoutDetail) -> Self {
        WorkoutExport {
            id: detail.workout.id,
            date: format_timestamp(&detail.workout.date),
            name: detail.workout.name.clone(),
            exercises: detail
                .exercises
                .iter()
                .map(|entry| WorkoutExerciseExport {
                    name: entry.exercise.name.clone(),
                    sets: entry
                        .sets
                        .iter()
                        .map(|s| SetExport {
                            set: s.set_index,
                            weight: s.weight,
                            reps: s.reps,
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Flat CSV row for one logged set.
#[derive(Debug, Serialize)]
struct SetRow<'a> {
    workout_id: i64,
    date: String,
    workout_name: &'a str,
    exercise: &'a str,
    set: i64,
    weight: f64,
    reps: i64,
}

pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    /// `output` of `None` writes to stdout.
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Self { format, output }
    }

    pub fn export(&self, db: &mut Db, data: ExportData, history_limit: usize) -> Result<()> {
        let payload = self.render(db, data, history_limit)?;

        match &self.output {
            Some(path) => {
                let mut file = File::create(path)?;
                file.write_all(payload.as_bytes())?;
                msg_success!(Message::ExportCompleted(path.display().to_string()));
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(payload.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }

    /// Serializes the requested data without writing it anywhere.
    pub fn render(&self, db: &mut Db, data: ExportData, history_limit: usize) -> Result<String> {
        match data {
            ExportData::Exercises => {
                let exercises: Vec<ExerciseExport> = db
                    .exercises()
                    .list()?
                    .into_iter()
                    .map(|e| ExerciseExport { name: e.name })
                    .collect();
                match self.format {
                    ExportFormat::Json => Ok(serde_json::to_string_pretty(&exercises)?),
                    ExportFormat::Csv => to_csv(&exercises),
                }
            }
            ExportData::History => {
                let history = db.history().workout_history(history_limit)?;
                match self.format {
                    ExportFormat::Json => {
                        let workouts: Vec<WorkoutExport> = history.iter().map(WorkoutExport::from).collect();
                        Ok(serde_json::to_string_pretty(&workouts)?)
                    }
                    ExportFormat::Csv => to_csv(&history_rows(&history)),
                }
            }
        }
    }
}

fn history_rows(history: &[WorkoutDetail]) -> Vec<SetRow<'_>> {
    let mut rows = Vec::new();
    for detail in history {
        let date = format_timestamp(&detail.workout.date);
        for entry in &detail.exercises {
            for set in &entry.sets {
                rows.push(SetRow {
                    workout_id: detail.workout.id,
                    date: date.clone(),
                    workout_name: detail.workout.name.as_deref().unwrap_or(""),
                    exercise: &entry.exercise.name,
                    set: set.set_index,
                    weight: set.weight,
                    reps: set.reps,
                });
            }
        }
    }
    rows
}

fn to_csv<T: Serialize>(rows: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Creates every exercise named in `payload`. Returns how many names were
/// processed, existing ones included.
pub fn import_exercises(db: &mut Db, payload: &str) -> Result<usize> {
    let parsed: Value = serde_json::from_str(payload)?;
    let Value::Array(items) = parsed else {
        msg_bail_anyhow!(Message::ImportNotArray);
    };

    let tx = db.conn.transaction()?;
    let mut processed = 0;
    for item in &items {
        let name = match item {
            Value::String(name) => name.as_str(),
            Value::Object(fields) => match fields.get("name") {
                Some(Value::String(name)) => name.as_str(),
                _ => continue,
            },
            _ => continue,
        };
        if name.trim().is_empty() {
            continue;
        }
        ensure_exercise(&tx, name)?;
        processed += 1;
    }
    tx.commit()?;

    tracing::debug!(processed, skipped = items.len() - processed, "exercises imported");
    Ok(processed)
}
