use crate::{
    db::db::Db,
    libs::{config::Config, formatter::format_date, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// How many workouts to include (defaults to `history_limit` from the config)
    #[arg(short, long)]
    limit: Option<usize>,
}

pub fn cmd(args: HistoryArgs) -> Result<()> {
    let limit = match args.limit {
        Some(limit) => limit,
        None => Config::read()?.history_limit(),
    };

    let db = Db::new()?;
    let history = db.history().workout_history(limit)?;
    if history.is_empty() {
        msg_info!(Message::NoWorkoutHistory);
        return Ok(());
    }

    msg_print!(Message::WorkoutHistoryHeader, true);
    for detail in &history {
        let header = Message::WorkoutHeader(detail.workout.id, format_date(&detail.workout.date));
        match &detail.workout.name {
            Some(name) => msg_print!(format!("{} {}", header, name)),
            None => msg_print!(header),
        }
        if detail.exercises.is_empty() {
            msg_info!(Message::WorkoutNoExercises);
        } else {
            View::workout(detail);
        }
    }
    Ok(())
}
