#[cfg(test)]
mod tests {
    use liftlog::db::db::Db;
    use liftlog::db::migrations::{get_db_version, latest_version, needs_migration, Migration, MigrationManager};
    use rusqlite::Connection;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("liftlog.db");
            MigrationTestContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    fn table_exists(conn: &Connection, table: &str) -> bool {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table],
            |row| row.get::<_, i64>(0),
        )
        .unwrap()
            == 1
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        assert_eq!(get_db_version(&db.conn).unwrap(), latest_version());
        assert!(!needs_migration(&db.conn).unwrap());

        for table in ["workouts", "exercises", "workout_exercises", "sets"] {
            assert!(table_exists(&db.conn, table), "missing table {}", table);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_store_starts_at_version_zero(ctx: &mut MigrationTestContext) {
        let conn = Connection::open(&ctx.db_path).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.db_path).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let first = manager.get_current_version(&conn).unwrap();
        manager.run_migrations(&mut conn).unwrap();
        let second = manager.get_current_version(&conn).unwrap();

        assert_eq!(first, second);
        assert_eq!(second, manager.latest_version());

        // Reopening an already migrated file is harmless too
        drop(conn);
        let db = Db::open(&ctx.db_path).unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), manager.latest_version());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_versions_are_strictly_increasing(_ctx: &mut MigrationTestContext) {
        let manager = MigrationManager::new();
        let versions: Vec<u32> = manager.migrations().iter().map(|m| m.version).collect();

        assert!(!versions.is_empty());
        assert!(versions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_failing_migration_rolls_back(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(&ctx.db_path).unwrap();
        let manager = MigrationManager::from_migrations([
            Migration::new(1, "create_notes", |tx| {
                tx.execute("CREATE TABLE IF NOT EXISTS notes (id INTEGER PRIMARY KEY, body TEXT)", [])?;
                Ok(())
            }),
            Migration::new(2, "broken", |tx| {
                tx.execute("CREATE TABLE IF NOT EXISTS tags (id INTEGER PRIMARY KEY)", [])?;
                tx.execute("THIS IS NOT SQL", [])?;
                Ok(())
            }),
        ]);

        assert!(manager.run_migrations(&mut conn).is_err());

        // Version 1 committed, version 2 left no trace
        assert_eq!(manager.get_current_version(&conn).unwrap(), 1);
        assert!(table_exists(&conn, "notes"));
        assert!(!table_exists(&conn, "tags"));
        assert!(manager.is_migration_applied(&conn, 1).unwrap());
        assert!(!manager.is_migration_applied(&conn, 2).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_foreign_keys_enforced(ctx: &mut MigrationTestContext) {
        let db = Db::open(&ctx.db_path).unwrap();

        let enabled: i64 = db.conn.pragma_query_value(None, "foreign_keys", |row| row.get(0)).unwrap();
        assert_eq!(enabled, 1);

        let orphan = db.conn.execute(
            "INSERT INTO sets (workout_exercise_id, set_index, weight, reps) VALUES (999, 1, 100.0, 5)",
            [],
        );
        assert!(orphan.is_err());
    }
}
