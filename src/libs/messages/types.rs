/// Every user-facing string liftlog prints or returns as an error.
///
/// Text lives in `display.rs`; call sites only pick a variant and its
/// parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === WORKOUT MESSAGES ===
    WorkoutStarted(i64),         // workout id
    WorkoutRenamed(i64),         // workout id
    WorkoutNotFound(i64),        // workout id
    WorkoutDeleted(i64),         // workout id
    WorkoutKept(i64, i64),       // workout id, set count
    WorkoutDiscarded(i64),       // workout id
    WorkoutHeader(i64, String),  // workout id, formatted date
    WorkoutNoExercises,
    RecentWorkoutsHeader,
    NoRecentWorkouts,
    WorkoutHistoryHeader,
    NoWorkoutHistory,

    // === WORKOUT EXERCISE MESSAGES ===
    ExerciseAddedToWorkout(String, i64),    // exercise name, link id
    ExerciseAlreadyInWorkout(String, i64),  // exercise name, link id
    ExerciseRemovedFromWorkout(i64),        // link id
    LastSession(String, String),            // formatted date, formatted sets
    NoPreviousSession,

    // === SET MESSAGES ===
    SetAdded(i64, String, i64), // set index, formatted weight, reps
    InvalidWeight(String),      // raw input

    // === EXERCISE MESSAGES ===
    ExerciseNameEmpty,
    ExerciseNotLoaded(String), // exercise name
    ExerciseNotFound(i64),     // exercise id
    ExerciseNotNamed(String),  // name or id as typed
    ExerciseRenamed(String),   // new name
    ExercisesMerged(String),   // surviving name
    ExerciseDeleted(i64),      // exercise id
    ExerciseListHeader,
    NoExercisesFound,
    ExerciseHistoryHeader(String), // exercise name
    NoExerciseHistory(String),     // exercise name
    ConfirmDeleteExercise(String), // exercise name

    // === EXPORT / IMPORT MESSAGES ===
    ExportCompleted(String), // output path
    ImportCompleted(usize),  // processed names
    ImportNotArray,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String), // error
    PromptDbPath,
    PromptRecentLimit,
    PromptHistoryLimit,

    // === GENERAL MESSAGES ===
    OperationCancelled,
    DataStoragePathError,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
}
