//! # Liftlog - local workout log
//!
//! A command-line strength training journal backed by a single SQLite file.
//!
//! ## Features
//!
//! - **Workouts**: Start a session, add exercises in order, log weight and reps per set
//! - **Exercise catalog**: Find-or-create by name, rename with merge, cascading delete
//! - **History**: Recent workouts, full workout history, per-exercise progress
//! - **Previous session**: Adding an exercise shows what was lifted last time
//! - **Data Export**: Exercises and history as JSON or CSV, exercise import from JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use liftlog::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
