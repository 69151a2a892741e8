use super::exercises::Exercises;
use super::history::History;
use super::migrations::init_with_migrations;
use super::sets::Sets;
use super::workout_exercises::WorkoutExercises;
use super::workouts::Workouts;
use crate::libs::config::Config;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub const DB_FILE_NAME: &str = "liftlog.db";

/// An open, migrated connection to the workout store.
///
/// Foreign key enforcement is switched on for every connection this type
/// hands out, since cascade ordering in the write paths relies on it.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the configured store and applies pending migrations.
    pub fn new() -> Result<Db> {
        let path = Config::read()?.db_path()?;
        Self::open(path)
    }

    /// Opens (creating if needed) the store at `path` and applies pending migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Db> {
        let mut conn = Self::connect(path.as_ref())?;
        init_with_migrations(&mut conn).context("failed to migrate database")?;
        Ok(Db { conn })
    }

    /// A private in-memory store, mostly useful for tests and dry runs.
    pub fn open_in_memory() -> Result<Db> {
        let mut conn = Connection::open_in_memory()?;
        enable_foreign_keys(&conn)?;
        init_with_migrations(&mut conn)?;
        Ok(Db { conn })
    }

    /// Opens the configured store without touching its schema.
    pub fn new_without_migrations() -> Result<Connection> {
        let path = Config::read()?.db_path()?;
        Self::connect(&path)
    }

    pub fn workouts(&mut self) -> Workouts<'_> {
        Workouts::new(&mut self.conn)
    }

    pub fn exercises(&mut self) -> Exercises<'_> {
        Exercises::new(&mut self.conn)
    }

    pub fn workout_exercises(&mut self) -> WorkoutExercises<'_> {
        WorkoutExercises::new(&mut self.conn)
    }

    pub fn sets(&mut self) -> Sets<'_> {
        Sets::new(&mut self.conn)
    }

    pub fn history(&self) -> History<'_> {
        History::new(&self.conn)
    }

    fn connect(path: &Path) -> Result<Connection> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("failed to create data directory")?;
            }
        }
        let conn = Connection::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        enable_foreign_keys(&conn)?;
        tracing::debug!(path = %path.display(), "database opened");
        Ok(conn)
    }
}

fn enable_foreign_keys(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "foreign_keys", true).context("failed to enable foreign keys")?;
    Ok(())
}
