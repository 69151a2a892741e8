#[cfg(test)]
mod tests {
    use liftlog::db::db::Db;
    use liftlog::db::StoreError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct EntryTestContext {
        _temp_dir: TempDir,
        db: Db,
    }

    impl TestContext for EntryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(temp_dir.path().join("liftlog.db")).unwrap();
            EntryTestContext { _temp_dir: temp_dir, db }
        }
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_add_assigns_order(ctx: &mut EntryTestContext) {
        let workout = ctx.db.workouts().create(None).unwrap();

        let squat = ctx.db.workout_exercises().add(workout.id, "Squat").unwrap();
        let bench = ctx.db.workout_exercises().add(workout.id, "Bench").unwrap();

        assert!(squat.created);
        assert_eq!(squat.entry.order_index, 1);
        assert_eq!(bench.entry.order_index, 2);
        assert_eq!(squat.exercise.name, "Squat");
        assert!(squat.last_session.is_none());
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_add_is_idempotent(ctx: &mut EntryTestContext) {
        let workout = ctx.db.workouts().create(None).unwrap();

        let first = ctx.db.workout_exercises().add(workout.id, "Squat").unwrap();
        let again = ctx.db.workout_exercises().add(workout.id, " Squat ").unwrap();

        assert!(!again.created);
        assert_eq!(again.entry, first.entry);
        assert_eq!(ctx.db.workout_exercises().list_for_workout(workout.id).unwrap().len(), 1);
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_add_reports_last_session(ctx: &mut EntryTestContext) {
        let earlier = ctx.db.workouts().create(None).unwrap();
        let previous = ctx.db.workout_exercises().add(earlier.id, "Squat").unwrap();
        ctx.db.sets().add(previous.entry.id, 100.0, 5).unwrap();
        ctx.db.sets().add(previous.entry.id, 105.0, 3).unwrap();

        let today = ctx.db.workouts().create(None).unwrap();
        let added = ctx.db.workout_exercises().add(today.id, "Squat").unwrap();

        let session = added.last_session.unwrap();
        assert_eq!(session.workout_id, earlier.id);
        assert_eq!(session.workout_exercise_id, previous.entry.id);
        let sets: Vec<(f64, i64)> = session.sets.iter().map(|s| (s.weight, s.reps)).collect();
        assert_eq!(sets, vec![(100.0, 5), (105.0, 3)]);
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_add_empty_name_rejected(ctx: &mut EntryTestContext) {
        let workout = ctx.db.workouts().create(None).unwrap();
        let result = ctx.db.workout_exercises().add(workout.id, "  ");
        assert!(matches!(result, Err(StoreError::EmptyExerciseName)));
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_add_to_missing_workout_rolls_back(ctx: &mut EntryTestContext) {
        let result = ctx.db.workout_exercises().add(999, "Squat");
        assert!(matches!(result, Err(StoreError::Sqlite(_))));

        // The exercise created inside the failed transaction is gone too
        assert!(ctx.db.exercises().get_by_name("Squat").unwrap().is_none());
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_remove_only_touches_one_entry(ctx: &mut EntryTestContext) {
        let first = ctx.db.workouts().create(None).unwrap();
        let second = ctx.db.workouts().create(None).unwrap();

        let dropped = ctx.db.workout_exercises().add(first.id, "Squat").unwrap();
        let survivor = ctx.db.workout_exercises().add(second.id, "Squat").unwrap();
        ctx.db.sets().add(dropped.entry.id, 100.0, 5).unwrap();
        ctx.db.sets().add(survivor.entry.id, 100.0, 5).unwrap();

        ctx.db.workout_exercises().remove(dropped.entry.id).unwrap();

        assert!(ctx.db.workout_exercises().get(dropped.entry.id).unwrap().is_none());
        assert!(ctx.db.sets().list(dropped.entry.id).unwrap().is_empty());
        assert_eq!(ctx.db.sets().list(survivor.entry.id).unwrap().len(), 1);
        assert!(ctx.db.exercises().get(dropped.exercise.id).unwrap().is_some());
    }

    #[test_context(EntryTestContext)]
    #[test]
    fn test_order_not_renumbered_after_remove(ctx: &mut EntryTestContext) {
        let workout = ctx.db.workouts().create(None).unwrap();
        ctx.db.workout_exercises().add(workout.id, "Squat").unwrap();
        let bench = ctx.db.workout_exercises().add(workout.id, "Bench").unwrap();
        let row = ctx.db.workout_exercises().add(workout.id, "Row").unwrap();

        ctx.db.workout_exercises().remove(bench.entry.id).unwrap();
        let curl = ctx.db.workout_exercises().add(workout.id, "Curl").unwrap();

        let order: Vec<i64> = ctx
            .db
            .workout_exercises()
            .list_for_workout(workout.id)
            .unwrap()
            .iter()
            .map(|e| e.order_index)
            .collect();
        assert_eq!(order, vec![1, 3, 4]);
        assert_eq!(row.entry.order_index, 3);
        assert_eq!(curl.entry.order_index, 4);
    }
}
