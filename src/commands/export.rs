//! Export of exercises or workout history as JSON or CSV.

use crate::{
    db::db::Db,
    libs::{
        config::Config,
        export::{ExportData, ExportFormat, Exporter},
    },
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// What to export
    #[arg(value_enum, default_value = "history")]
    data: ExportData,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of workouts in a history export (defaults to `history_limit`)
    #[arg(short, long)]
    limit: Option<usize>,
}

/// ```bash
/// liftlog export exercises --format csv
/// liftlog export history --limit 50 --output history.json
/// ```
pub fn cmd(args: ExportArgs) -> Result<()> {
    let limit = match args.limit {
        Some(limit) => limit,
        None => Config::read()?.history_limit(),
    };

    let mut db = Db::new()?;
    Exporter::new(args.format, args.output).export(&mut db, args.data, limit)
}
