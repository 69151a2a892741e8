use super::formatter::{format_date, format_sets, format_weight};
use crate::db::exercises::Exercise;
use crate::db::history::{ExerciseSession, RecentWorkout, SetSummary, WorkoutDetail};
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn recent_workouts(workouts: &[RecentWorkout]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "NAME", "EXERCISES", "SETS"]);
        for recent in workouts {
            table.add_row(row![
                recent.workout.id,
                format_date(&recent.workout.date),
                recent.workout.name.as_deref().unwrap_or("-"),
                recent.exercise_count,
                recent.set_count
            ]);
        }
        table.printstd();
    }

    pub fn workout(detail: &WorkoutDetail) {
        let mut table = Table::new();

        table.add_row(row!["ENTRY", "#", "EXERCISE", "SET", "WEIGHT", "REPS", "LAST TIME"]);
        for entry in &detail.exercises {
            let last_time = entry
                .last_session
                .as_ref()
                .map(|session| format!("{} ({})", format_sets(&session.sets), format_date(&session.date)))
                .unwrap_or_else(|| "-".to_string());

            if entry.sets.is_empty() {
                table.add_row(row![entry.workout_exercise_id, entry.order_index, entry.exercise.name, "-", "-", "-", last_time]);
                continue;
            }

            for (i, set) in entry.sets.iter().enumerate() {
                let (id, order, name, last) = if i == 0 {
                    (
                        entry.workout_exercise_id.to_string(),
                        entry.order_index.to_string(),
                        entry.exercise.name.clone(),
                        last_time.clone(),
                    )
                } else {
                    Default::default()
                };
                table.add_row(row![id, order, name, set.set_index, format_weight(set.weight), set.reps, last]);
            }
        }
        table.printstd();
    }

    pub fn exercises(exercises: &[Exercise]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME"]);
        for exercise in exercises {
            table.add_row(row![exercise.id, exercise.name]);
        }
        table.printstd();
    }

    pub fn exercise_history(sessions: &[ExerciseSession]) {
        let mut table = Table::new();

        table.add_row(row!["WORKOUT", "DATE", "SETS", "BEST"]);
        for session in sessions {
            table.add_row(row![
                session.workout_id,
                format_date(&session.date),
                format_sets(&session.sets),
                best_set(&session.sets).map(|s| format!("{} x {}", format_weight(s.weight), s.reps)).unwrap_or_default()
            ]);
        }
        table.printstd();
    }
}

/// Heaviest set, ties broken by reps.
fn best_set(sets: &[SetSummary]) -> Option<&SetSummary> {
    sets.iter()
        .max_by(|a, b| a.weight.total_cmp(&b.weight).then(a.reps.cmp(&b.reps)))
}
