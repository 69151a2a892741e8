#[cfg(test)]
mod tests {
    use liftlog::db::db::Db;
    use liftlog::db::workouts::FinalizeOutcome;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FinalizeTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for FinalizeTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("liftlog.db")).unwrap();
            FinalizeTestContext { _temp_dir: temp_dir, db }
        }
    }

    #[test_context(FinalizeTestContext)]
    #[test]
    fn test_empty_workout_discarded(ctx: &mut FinalizeTestContext) {
        let workout = ctx.db.workouts().create(Some("Skipped")).unwrap();

        let outcome = ctx.db.workouts().finalize(workout.id).unwrap();
        assert_eq!(outcome, FinalizeOutcome { kept: false, set_count: 0 });
        assert!(ctx.db.workouts().get(workout.id).unwrap().is_none());
    }

    #[test_context(FinalizeTestContext)]
    #[test]
    fn test_workout_with_unlogged_exercises_discarded(ctx: &mut FinalizeTestContext) {
        let workout = ctx.db.workouts().create(None).unwrap();
        ctx.db.workout_exercises().add(workout.id, "Squat").unwrap();
        ctx.db.workout_exercises().add(workout.id, "Bench").unwrap();

        let outcome = ctx.db.workouts().finalize(workout.id).unwrap();
        assert!(!outcome.kept);
        assert!(ctx.db.workouts().get(workout.id).unwrap().is_none());
        assert!(ctx.db.workout_exercises().list_for_workout(workout.id).unwrap().is_empty());

        // Exercises created along the way stay in the catalogue
        assert_eq!(ctx.db.exercises().list().unwrap().len(), 2);
    }

    #[test_context(FinalizeTestContext)]
    #[test]
    fn test_unlogged_entries_pruned(ctx: &mut FinalizeTestContext) {
        let workout = ctx.db.workouts().create(None).unwrap();
        let squat = ctx.db.workout_exercises().add(workout.id, "Squat").unwrap();
        let bench = ctx.db.workout_exercises().add(workout.id, "Bench").unwrap();
        let row = ctx.db.workout_exercises().add(workout.id, "Row").unwrap();
        ctx.db.sets().add(squat.entry.id, 100.0, 5).unwrap();
        ctx.db.sets().add(row.entry.id, 70.0, 8).unwrap();
        ctx.db.sets().add(row.entry.id, 70.0, 8).unwrap();

        let outcome = ctx.db.workouts().finalize(workout.id).unwrap();
        assert_eq!(outcome, FinalizeOutcome { kept: true, set_count: 3 });

        let entries = ctx.db.workout_exercises().list_for_workout(workout.id).unwrap();
        let ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![squat.entry.id, row.entry.id]);
        assert!(ctx.db.workout_exercises().get(bench.entry.id).unwrap().is_none());

        // Positions are not renumbered
        assert_eq!(entries[1].order_index, 3);
    }

    #[test_context(FinalizeTestContext)]
    #[test]
    fn test_finalize_is_repeatable(ctx: &mut FinalizeTestContext) {
        let workout = ctx.db.workouts().create(None).unwrap();
        let squat = ctx.db.workout_exercises().add(workout.id, "Squat").unwrap();
        ctx.db.sets().add(squat.entry.id, 100.0, 5).unwrap();

        let first = ctx.db.workouts().finalize(workout.id).unwrap();
        let second = ctx.db.workouts().finalize(workout.id).unwrap();
        assert_eq!(first, second);
        assert!(second.kept);
    }

    #[test_context(FinalizeTestContext)]
    #[test]
    fn test_finalize_leaves_other_workouts_alone(ctx: &mut FinalizeTestContext) {
        let other = ctx.db.workouts().create(None).unwrap();
        let pending = ctx.db.workout_exercises().add(other.id, "Squat").unwrap();

        let workout = ctx.db.workouts().create(None).unwrap();
        ctx.db.workouts().finalize(workout.id).unwrap();

        assert!(ctx.db.workouts().get(other.id).unwrap().is_some());
        assert!(ctx.db.workout_exercises().get(pending.entry.id).unwrap().is_some());
    }

    #[test_context(FinalizeTestContext)]
    #[test]
    fn test_finalize_unknown_workout(ctx: &mut FinalizeTestContext) {
        let outcome = ctx.db.workouts().finalize(12345).unwrap();
        assert!(!outcome.kept);
    }
}
