pub mod exercise;
pub mod export;
pub mod history;
pub mod import;
pub mod init;
#[cfg(debug_assertions)]
pub mod migrations;
pub mod recent;
pub mod workout;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Start, log and finish workouts")]
    Workout(workout::WorkoutArgs),
    #[command(about = "Manage exercises")]
    Exercise(exercise::ExerciseArgs),
    #[command(about = "Show the most recent workouts")]
    Recent(recent::RecentArgs),
    #[command(about = "Show workout history with all sets")]
    History(history::HistoryArgs),
    #[command(about = "Export exercises or workout history")]
    Export(export::ExportArgs),
    #[command(about = "Import exercise names from a JSON array")]
    Import(import::ImportArgs),
    #[cfg(debug_assertions)]
    #[command(about = "Inspect the database schema version")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Workout(args) => workout::cmd(args),
            Commands::Exercise(args) => exercise::cmd(args),
            Commands::Recent(args) => recent::cmd(args),
            Commands::History(args) => history::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            #[cfg(debug_assertions)]
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
