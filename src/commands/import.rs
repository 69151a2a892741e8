use crate::{
    db::db::Db,
    libs::{export::import_exercises, messages::Message},
    msg_success,
};
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// JSON file with exercise names, or `-` for stdin
    file: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let payload = if args.file.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(&args.file).with_context(|| format!("failed to read {}", args.file.display()))?
    };

    let mut db = Db::new()?;
    let count = import_exercises(&mut db, &payload)?;
    msg_success!(Message::ImportCompleted(count));
    Ok(())
}
