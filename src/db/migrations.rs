//! Versioned schema migrations.
//!
//! The applied schema version is a single integer kept in SQLite's
//! `PRAGMA user_version` (0 on a fresh file). Migrations are registered in
//! ascending version order; every migration above the stored version is
//! applied in its own transaction together with the version bump, so a
//! failing statement leaves both the schema and the version untouched and
//! the next start retries from the same point.
//!
//! All DDL is guarded (`IF NOT EXISTS`) so running against a partially or
//! fully migrated store is harmless.
//!
//! ```rust
//! use liftlog::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open_in_memory()?;
//! init_with_migrations(&mut conn)?;
//! assert!(get_db_version(&conn)? > 0);
//! # Ok::<(), rusqlite::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error};
use rusqlite::{Connection, Result, Transaction};

/// A single schema step.
#[derive(Debug, Clone)]
pub struct Migration {
    /// Strictly increasing version number
    pub version: u32,
    /// Short description of the change
    pub name: &'static str,
    /// Applies the change inside the caller's transaction
    up: fn(&Transaction) -> Result<()>,
}

impl Migration {
    pub fn new(version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) -> Self {
        Self { version, name, up }
    }
}

/// Ordered registry of migrations plus the logic to apply them.
///
/// Intended to run once at startup, before any other store access, on a
/// single connection.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// A manager over an explicit migration list instead of the built-in one.
    pub fn from_migrations(migrations: impl IntoIterator<Item = Migration>) -> Self {
        let mut manager = Self { migrations: Vec::new() };
        for migration in migrations {
            manager.add_migration(migration.version, migration.name, migration.up);
        }
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: the four workout tables and their lookup indices
        self.add_migration(1, "create_workout_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS workouts (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    date TEXT NOT NULL,
                    name TEXT
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS exercises (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    name TEXT NOT NULL UNIQUE
                )",
                [],
            )?;

            // Owned rows are removed explicitly by the write paths, so the
            // references carry no ON DELETE action.
            tx.execute(
                "CREATE TABLE IF NOT EXISTS workout_exercises (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    workout_id INTEGER NOT NULL REFERENCES workouts(id),
                    exercise_id INTEGER NOT NULL REFERENCES exercises(id),
                    order_index INTEGER NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS sets (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    workout_exercise_id INTEGER NOT NULL REFERENCES workout_exercises(id),
                    set_index INTEGER NOT NULL,
                    weight REAL NOT NULL,
                    reps INTEGER NOT NULL
                )",
                [],
            )?;

            tx.execute(
                "CREATE INDEX IF NOT EXISTS idx_workout_exercises_workout_id ON workout_exercises (workout_id)",
                [],
            )?;
            tx.execute(
                "CREATE INDEX IF NOT EXISTS idx_workout_exercises_exercise_id ON workout_exercises (exercise_id)",
                [],
            )?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_sets_workout_exercise_id ON sets (workout_exercise_id)", [])?;
            Ok(())
        });

        // Version 2: recent/history listings order by date
        self.add_migration(2, "index_workout_dates", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_workouts_date ON workouts (date)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        debug_assert!(
            self.migrations.last().map_or(true, |last| last.version < version),
            "migrations must be registered in ascending version order"
        );
        self.migrations.push(Migration { version, name, up });
    }

    /// Registered migrations in application order.
    pub fn migrations(&self) -> &[Migration] {
        &self.migrations
    }

    /// Applies every migration newer than the stored version, one
    /// transaction per migration.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        conn.pragma_update(None, "foreign_keys", true)?;

        let current_version = self.get_current_version(conn)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        tracing::info!("{}", Message::MigrationsFound(pending.len()));

        for migration in pending {
            tracing::info!("{}", Message::RunningMigration(migration.version, migration.name.to_string()));
            if let Err(e) = Self::apply(conn, migration) {
                msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                return Err(e);
            }
            tracing::info!("{}", Message::MigrationCompleted(migration.version));
        }

        tracing::info!("{}", Message::AllMigrationsCompleted);
        Ok(())
    }

    fn apply(conn: &mut Connection, migration: &Migration) -> Result<()> {
        // Dropping the transaction on an early return rolls everything back,
        // including the version bump.
        let tx = conn.transaction()?;
        (migration.up)(&tx)?;
        tx.pragma_update(None, "user_version", migration.version)?;
        tx.commit()
    }

    /// The stored schema version, 0 for a fresh store.
    pub fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        conn.pragma_query_value(None, "user_version", |row| row.get(0))
    }

    pub fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    pub fn is_migration_applied(&self, conn: &Connection, version: u32) -> Result<bool> {
        Ok(self.get_current_version(conn)? >= version)
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Brings `conn` up to the latest schema.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run_migrations(conn)
}

pub fn get_db_version(conn: &Connection) -> Result<u32> {
    MigrationManager::new().get_current_version(conn)
}

pub fn latest_version() -> u32 {
    MigrationManager::new().latest_version()
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(manager.get_current_version(conn)? < manager.latest_version())
}
