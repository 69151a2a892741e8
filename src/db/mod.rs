//! Local workout store.
//!
//! Four tables make up the schema: `workouts`, `exercises`,
//! `workout_exercises` (an exercise's entry within a workout) and `sets`.
//! A workout owns its entries, an entry owns its sets, and exercises are
//! shared by reference. Every write that touches more than one table runs in
//! a single transaction, so owners and owned rows never drift apart.
//!
//! ```rust
//! use liftlog::db::db::Db;
//!
//! let mut db = Db::open_in_memory()?;
//! let workout = db.workouts().create(Some("Leg day"))?;
//! let added = db.workout_exercises().add(workout.id, "Squat")?;
//! db.sets().add(added.entry.id, 100.0, 5)?;
//! let outcome = db.workouts().finalize(workout.id)?;
//! assert!(outcome.kept);
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup and repository accessors.
pub mod db;

/// Persistence error type.
pub mod error;

/// Exercise catalogue: find-or-create, rename with merge, delete.
pub mod exercises;

/// Joined read views: workout detail, recent workouts, history, last session.
pub mod history;

/// Versioned schema migrations.
pub mod migrations;

/// Weight/reps sets.
pub mod sets;

/// Exercise entries inside a workout.
pub mod workout_exercises;

/// Workout sessions and end-of-session cleanup.
pub mod workouts;

pub use error::{Result, StoreError};
