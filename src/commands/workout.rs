use crate::{
    db::db::Db,
    libs::{
        formatter::{format_date, format_sets, format_weight},
        messages::Message,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct WorkoutArgs {
    #[command(subcommand)]
    command: WorkoutCommand,
}

#[derive(Debug, Subcommand)]
enum WorkoutCommand {
    /// Start a new workout
    Start {
        /// Optional workout name
        #[arg(short, long)]
        name: Option<String>,
    },
    /// Show a workout with its exercises and sets
    Show {
        /// Workout ID
        id: i64,
    },
    /// Rename a workout (omit the name to clear it)
    Rename {
        /// Workout ID
        id: i64,
        /// New name
        name: Option<String>,
    },
    /// Add an exercise to a workout, creating the exercise if needed
    Add {
        /// Workout ID
        id: i64,
        /// Exercise name
        exercise: String,
    },
    /// Log a set for a workout entry
    Set {
        /// Workout entry ID (see `workout show`)
        entry: i64,
        /// Weight
        #[arg(value_parser = parse_weight, allow_negative_numbers = true)]
        weight: f64,
        /// Repetitions
        #[arg(value_parser = clap::value_parser!(i64).range(0..))]
        reps: i64,
    },
    /// Remove an exercise entry and its sets from a workout
    Drop {
        /// Workout entry ID
        entry: i64,
    },
    /// Finish a workout, discarding it if nothing was logged
    Finish {
        /// Workout ID
        id: i64,
    },
    /// Delete a workout with everything logged in it
    Delete {
        /// Workout ID
        id: i64,
    },
}

pub fn cmd(args: WorkoutArgs) -> Result<()> {
    let mut db = Db::new()?;
    match args.command {
        WorkoutCommand::Start { name } => handle_start(&mut db, name),
        WorkoutCommand::Show { id } => handle_show(&mut db, id),
        WorkoutCommand::Rename { id, name } => handle_rename(&mut db, id, name),
        WorkoutCommand::Add { id, exercise } => handle_add(&mut db, id, exercise),
        WorkoutCommand::Set { entry, weight, reps } => handle_set(&mut db, entry, weight, reps),
        WorkoutCommand::Drop { entry } => {
            db.workout_exercises().remove(entry)?;
            msg_success!(Message::ExerciseRemovedFromWorkout(entry));
            Ok(())
        }
        WorkoutCommand::Finish { id } => handle_finish(&mut db, id),
        WorkoutCommand::Delete { id } => {
            db.workouts().delete(id)?;
            msg_success!(Message::WorkoutDeleted(id));
            Ok(())
        }
    }
}

fn handle_start(db: &mut Db, name: Option<String>) -> Result<()> {
    let workout = db.workouts().create(name.as_deref())?;
    msg_success!(Message::WorkoutStarted(workout.id));
    Ok(())
}

fn handle_show(db: &mut Db, id: i64) -> Result<()> {
    let Some(detail) = db.history().workout_detail(id)? else {
        msg_error!(Message::WorkoutNotFound(id));
        return Ok(());
    };

    let header = Message::WorkoutHeader(detail.workout.id, format_date(&detail.workout.date));
    match &detail.workout.name {
        Some(name) => msg_print!(format!("{} {}", header, name), true),
        None => msg_print!(header, true),
    }

    if detail.exercises.is_empty() {
        msg_info!(Message::WorkoutNoExercises);
        return Ok(());
    }
    View::workout(&detail);
    Ok(())
}

fn handle_rename(db: &mut Db, id: i64, name: Option<String>) -> Result<()> {
    match db.workouts().rename(id, name.as_deref())? {
        Some(workout) => msg_success!(Message::WorkoutRenamed(workout.id)),
        None => msg_error!(Message::WorkoutNotFound(id)),
    }
    Ok(())
}

fn handle_add(db: &mut Db, id: i64, exercise: String) -> Result<()> {
    if db.workouts().get(id)?.is_none() {
        msg_error!(Message::WorkoutNotFound(id));
        return Ok(());
    }

    let added = db.workout_exercises().add(id, &exercise)?;
    if added.created {
        msg_success!(Message::ExerciseAddedToWorkout(added.exercise.name.clone(), added.entry.id));
    } else {
        msg_warning!(Message::ExerciseAlreadyInWorkout(added.exercise.name.clone(), added.entry.id));
    }

    match &added.last_session {
        Some(session) => msg_info!(Message::LastSession(format_date(&session.date), format_sets(&session.sets))),
        None => msg_info!(Message::NoPreviousSession),
    }
    Ok(())
}

fn handle_set(db: &mut Db, entry: i64, weight: f64, reps: i64) -> Result<()> {
    let set = db.sets().add(entry, weight, reps)?;
    msg_success!(Message::SetAdded(set.set_index, format_weight(set.weight), set.reps));
    Ok(())
}

fn handle_finish(db: &mut Db, id: i64) -> Result<()> {
    let outcome = db.workouts().finalize(id)?;
    if outcome.kept {
        msg_success!(Message::WorkoutKept(id, outcome.set_count));
    } else {
        msg_info!(Message::WorkoutDiscarded(id));
    }
    Ok(())
}

fn parse_weight(raw: &str) -> Result<f64, String> {
    let weight: f64 = raw.parse().map_err(|e| format!("{e}"))?;
    if !weight.is_finite() {
        return Err(Message::InvalidWeight(raw.to_string()).to_string());
    }
    Ok(weight)
}
