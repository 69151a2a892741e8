use crate::{
    db::db::Db,
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct RecentArgs {
    /// How many workouts to list (defaults to `recent_limit` from the config)
    #[arg(short, long)]
    limit: Option<usize>,
}

pub fn cmd(args: RecentArgs) -> Result<()> {
    let limit = match args.limit {
        Some(limit) => limit,
        None => Config::read()?.recent_limit(),
    };

    let db = Db::new()?;
    let workouts = db.history().recent_workouts(limit)?;
    if workouts.is_empty() {
        msg_info!(Message::NoRecentWorkouts);
        return Ok(());
    }

    msg_print!(Message::RecentWorkoutsHeader, true);
    View::recent_workouts(&workouts);
    Ok(())
}
