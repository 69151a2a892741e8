#[cfg(test)]
mod tests {
    use liftlog::db::db::Db;
    use liftlog::db::exercises::RenameOutcome;
    use liftlog::db::StoreError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExerciseTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for ExerciseTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("liftlog.db")).unwrap();
            ExerciseTestContext { _temp_dir: temp_dir, db }
        }
    }

    fn count(db: &Db, table: &str) -> i64 {
        db.conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))
            .unwrap()
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_ensure_is_idempotent(ctx: &mut ExerciseTestContext) {
        let first = ctx.db.exercises().ensure("Squat").unwrap();
        let second = ctx.db.exercises().ensure("  Squat ").unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(second.name, "Squat");
        assert_eq!(count(&ctx.db, "exercises"), 1);
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_names_are_case_sensitive(ctx: &mut ExerciseTestContext) {
        let lower = ctx.db.exercises().ensure("squat").unwrap();
        let upper = ctx.db.exercises().ensure("Squat").unwrap();

        assert_ne!(lower.id, upper.id);
        assert_eq!(count(&ctx.db, "exercises"), 2);
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_empty_name_rejected(ctx: &mut ExerciseTestContext) {
        assert!(matches!(ctx.db.exercises().ensure(""), Err(StoreError::EmptyExerciseName)));
        assert!(matches!(ctx.db.exercises().ensure(" \t\n"), Err(StoreError::EmptyExerciseName)));
        assert_eq!(count(&ctx.db, "exercises"), 0);

        let squat = ctx.db.exercises().ensure("Squat").unwrap();
        assert!(matches!(ctx.db.exercises().rename(squat.id, "   "), Err(StoreError::EmptyExerciseName)));
        assert_eq!(ctx.db.exercises().get(squat.id).unwrap().unwrap().name, "Squat");
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_list_sorted_case_insensitive(ctx: &mut ExerciseTestContext) {
        for name in ["deadlift", "Bench", "squat", "Arnold press"] {
            ctx.db.exercises().ensure(name).unwrap();
        }

        let names: Vec<String> = ctx.db.exercises().list().unwrap().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Arnold press", "Bench", "deadlift", "squat"]);
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_rename_in_place(ctx: &mut ExerciseTestContext) {
        let squat = ctx.db.exercises().ensure("Squat").unwrap();

        let outcome = ctx.db.exercises().rename(squat.id, " Back squat ").unwrap();
        assert!(!outcome.is_merge());
        assert_eq!(outcome.exercise().id, squat.id);
        assert_eq!(outcome.exercise().name, "Back squat");

        assert!(ctx.db.exercises().get_by_name("Squat").unwrap().is_none());
        assert_eq!(ctx.db.exercises().get_by_name("Back squat").unwrap().unwrap().id, squat.id);
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_rename_to_own_name(ctx: &mut ExerciseTestContext) {
        let squat = ctx.db.exercises().ensure("Squat").unwrap();
        let outcome = ctx.db.exercises().rename(squat.id, "Squat").unwrap();
        assert_eq!(outcome, RenameOutcome::Renamed(squat));
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_rename_merges_on_collision(ctx: &mut ExerciseTestContext) {
        let monday = ctx.db.workouts().create(Some("Monday")).unwrap();
        let thursday = ctx.db.workouts().create(Some("Thursday")).unwrap();

        let typo = ctx.db.workout_exercises().add(monday.id, "Sqaut").unwrap();
        ctx.db.sets().add(typo.entry.id, 100.0, 5).unwrap();
        let proper = ctx.db.workout_exercises().add(thursday.id, "Squat").unwrap();
        ctx.db.sets().add(proper.entry.id, 105.0, 5).unwrap();

        let outcome = ctx.db.exercises().rename(typo.exercise.id, "Squat").unwrap();
        match &outcome {
            RenameOutcome::Merged { from, into } => {
                assert_eq!(*from, typo.exercise.id);
                assert_eq!(into.id, proper.exercise.id);
            }
            other => panic!("expected merge, got {:?}", other),
        }

        // The old identity is gone
        assert!(ctx.db.exercises().get(typo.exercise.id).unwrap().is_none());
        assert_eq!(count(&ctx.db, "exercises"), 1);

        // Its entry and sets now belong to the surviving exercise
        let entry = ctx.db.workout_exercises().get(typo.entry.id).unwrap().unwrap();
        assert_eq!(entry.exercise_id, proper.exercise.id);
        assert_eq!(ctx.db.sets().list(typo.entry.id).unwrap().len(), 1);

        let history = ctx.db.history().exercise_history(proper.exercise.id).unwrap();
        let workouts: Vec<i64> = history.iter().map(|s| s.workout_id).collect();
        assert_eq!(workouts, vec![thursday.id, monday.id]);
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_rename_missing_exercise(ctx: &mut ExerciseTestContext) {
        ctx.db.exercises().ensure("Squat").unwrap();

        assert!(matches!(ctx.db.exercises().rename(777, "Bench"), Err(StoreError::ExerciseNotFound(777))));
        assert!(matches!(ctx.db.exercises().rename(777, "Squat"), Err(StoreError::ExerciseNotFound(777))));
        assert!(ctx.db.exercises().get_by_name("Bench").unwrap().is_none());
    }

    #[test_context(ExerciseTestContext)]
    #[test]
    fn test_delete_cascades_across_workouts(ctx: &mut ExerciseTestContext) {
        let first = ctx.db.workouts().create(None).unwrap();
        let second = ctx.db.workouts().create(None).unwrap();

        let a = ctx.db.workout_exercises().add(first.id, "Curl").unwrap();
        let b = ctx.db.workout_exercises().add(second.id, "Curl").unwrap();
        let keep = ctx.db.workout_exercises().add(second.id, "Row").unwrap();
        ctx.db.sets().add(a.entry.id, 20.0, 10).unwrap();
        ctx.db.sets().add(b.entry.id, 22.5, 8).unwrap();
        ctx.db.sets().add(keep.entry.id, 60.0, 8).unwrap();

        ctx.db.exercises().delete(a.exercise.id).unwrap();

        assert!(ctx.db.exercises().get(a.exercise.id).unwrap().is_none());
        assert!(ctx.db.workout_exercises().get(a.entry.id).unwrap().is_none());
        assert!(ctx.db.workout_exercises().get(b.entry.id).unwrap().is_none());
        assert_eq!(count(&ctx.db, "workout_exercises"), 1);
        assert_eq!(count(&ctx.db, "sets"), 1);

        // Workouts themselves survive
        assert!(ctx.db.workouts().get(first.id).unwrap().is_some());
        assert!(ctx.db.workouts().get(second.id).unwrap().is_some());
    }
}
