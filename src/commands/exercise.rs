use crate::{
    db::{
        db::Db,
        exercises::{Exercise, RenameOutcome},
    },
    libs::{messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ExerciseArgs {
    #[command(subcommand)]
    command: Option<ExerciseCommand>,
}

#[derive(Debug, Subcommand)]
enum ExerciseCommand {
    /// List all exercises
    List,
    /// Show every session logged for an exercise
    Show {
        /// Exercise name or ID
        exercise: String,
    },
    /// Rename an exercise, merging it into an existing one on collision
    Rename {
        /// Exercise name or ID
        exercise: String,
        /// New name
        name: String,
    },
    /// Delete an exercise together with its workout entries and sets
    Delete {
        /// Exercise name or ID
        exercise: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: ExerciseArgs) -> Result<()> {
    let mut db = Db::new()?;
    match args.command {
        None | Some(ExerciseCommand::List) => handle_list(&mut db),
        Some(ExerciseCommand::Show { exercise }) => handle_show(&mut db, exercise),
        Some(ExerciseCommand::Rename { exercise, name }) => handle_rename(&mut db, exercise, name),
        Some(ExerciseCommand::Delete { exercise, yes }) => handle_delete(&mut db, exercise, yes),
    }
}

fn handle_list(db: &mut Db) -> Result<()> {
    let exercises = db.exercises().list()?;
    if exercises.is_empty() {
        msg_info!(Message::NoExercisesFound);
        return Ok(());
    }

    msg_print!(Message::ExerciseListHeader, true);
    View::exercises(&exercises);
    Ok(())
}

fn handle_show(db: &mut Db, identifier: String) -> Result<()> {
    let Some(exercise) = find(db, &identifier)? else {
        return Ok(());
    };

    let sessions = db.history().exercise_history(exercise.id)?;
    if sessions.is_empty() {
        msg_info!(Message::NoExerciseHistory(exercise.name));
        return Ok(());
    }

    msg_print!(Message::ExerciseHistoryHeader(exercise.name), true);
    View::exercise_history(&sessions);
    Ok(())
}

fn handle_rename(db: &mut Db, identifier: String, name: String) -> Result<()> {
    let Some(exercise) = find(db, &identifier)? else {
        return Ok(());
    };

    match db.exercises().rename(exercise.id, &name)? {
        RenameOutcome::Renamed(renamed) => msg_success!(Message::ExerciseRenamed(renamed.name)),
        RenameOutcome::Merged { into, .. } => msg_success!(Message::ExercisesMerged(into.name)),
    }
    Ok(())
}

fn handle_delete(db: &mut Db, identifier: String, yes: bool) -> Result<()> {
    let Some(exercise) = find(db, &identifier)? else {
        return Ok(());
    };

    let confirmed = yes
        || Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteExercise(exercise.name.clone()).to_string())
            .default(false)
            .interact()?;

    if confirmed {
        db.exercises().delete(exercise.id)?;
        msg_success!(Message::ExerciseDeleted(exercise.id));
    } else {
        msg_info!(Message::OperationCancelled);
    }
    Ok(())
}

/// Looks an exercise up by ID first, then by name. Reports a miss itself.
fn find(db: &mut Db, identifier: &str) -> Result<Option<Exercise>> {
    let exercise = match identifier.parse::<i64>() {
        Ok(id) => match db.exercises().get(id)? {
            Some(exercise) => Some(exercise),
            None => db.exercises().get_by_name(identifier)?,
        },
        Err(_) => db.exercises().get_by_name(identifier)?,
    };

    if exercise.is_none() {
        msg_error!(Message::ExerciseNotNamed(identifier.to_string()));
    }
    Ok(exercise)
}
