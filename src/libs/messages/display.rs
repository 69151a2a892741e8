//! Display implementation for liftlog messages.
//!
//! All message text is defined here so wording stays consistent between
//! console output, log events and error values.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let s = match self {
            // === WORKOUT MESSAGES ===
            Message::WorkoutStarted(id) => format!("Workout #{} started", id),
            Message::WorkoutRenamed(id) => format!("Workout #{} renamed", id),
            Message::WorkoutNotFound(id) => format!("Workout #{} not found", id),
            Message::WorkoutDeleted(id) => format!("Workout #{} deleted", id),
            Message::WorkoutKept(id, sets) => format!("Workout #{} saved with {} set(s)", id, sets),
            Message::WorkoutDiscarded(id) => format!("Workout #{} had no sets and was discarded", id),
            Message::WorkoutHeader(id, date) => format!("🏋️ Workout #{} ({})", id, date),
            Message::WorkoutNoExercises => "No exercises logged yet".to_string(),
            Message::RecentWorkoutsHeader => "🕒 Recent workouts".to_string(),
            Message::NoRecentWorkouts => "No workouts yet. Start one with `liftlog workout start`".to_string(),
            Message::WorkoutHistoryHeader => "📜 Workout history".to_string(),
            Message::NoWorkoutHistory => "No workout history found".to_string(),

            // === WORKOUT EXERCISE MESSAGES ===
            Message::ExerciseAddedToWorkout(name, link) => format!("'{}' added to workout (entry #{})", name, link),
            Message::ExerciseAlreadyInWorkout(name, link) => format!("'{}' is already part of this workout (entry #{})", name, link),
            Message::ExerciseRemovedFromWorkout(link) => format!("Entry #{} removed from workout", link),
            Message::LastSession(date, sets) => format!("Last time ({}): {}", date, sets),
            Message::NoPreviousSession => "No previous session for this exercise".to_string(),

            // === SET MESSAGES ===
            Message::SetAdded(index, weight, reps) => format!("Set {} logged: {} x {}", index, weight, reps),
            Message::InvalidWeight(raw) => format!("'{}' is not a valid weight", raw),

            // === EXERCISE MESSAGES ===
            Message::ExerciseNameEmpty => "Exercise name cannot be empty".to_string(),
            Message::ExerciseNotLoaded(name) => format!("Unable to load exercise record '{}'", name),
            Message::ExerciseNotFound(id) => format!("Exercise #{} not found", id),
            Message::ExerciseNotNamed(identifier) => format!("No exercise matches '{}'", identifier),
            Message::ExerciseRenamed(name) => format!("Exercise renamed to '{}'", name),
            Message::ExercisesMerged(name) => format!("Exercise merged into existing '{}'", name),
            Message::ExerciseDeleted(id) => format!("Exercise #{} and all of its sets deleted", id),
            Message::ExerciseListHeader => "📋 Exercises".to_string(),
            Message::NoExercisesFound => "No exercises found".to_string(),
            Message::ExerciseHistoryHeader(name) => format!("📈 History for '{}'", name),
            Message::NoExerciseHistory(name) => format!("'{}' has not been logged in any workout", name),
            Message::ConfirmDeleteExercise(name) => {
                format!("Delete '{}' and every set logged for it across all workouts?", name)
            }

            // === EXPORT / IMPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export written to {}", path),
            Message::ImportCompleted(count) => format!("Imported {} exercise name(s)", count),
            Message::ImportNotArray => "Import payload must be a JSON array".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError(err) => format!("Failed to parse configuration: {}", err),
            Message::PromptDbPath => "Database file (leave empty for default)".to_string(),
            Message::PromptRecentLimit => "Workouts shown in the recent list".to_string(),
            Message::PromptHistoryLimit => "Workouts shown in history".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::DataStoragePathError => "Failed to resolve data storage path".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, err) => format!("Migration v{} failed: {}", version, err),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database needs migration".to_string(),
        };
        write!(f, "{}", s)
    }
}
