//! User configuration.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). Every field is optional so a missing or partial file
//! falls back to defaults:
//!
//! ```json
//! {
//!   "db_path": "/home/me/Dropbox/liftlog.db",
//!   "recent_limit": 5,
//!   "history_limit": 20
//! }
//! ```
//!
//! The `LIFTLOG_DB` environment variable overrides `db_path`.

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_PATH_ENV: &str = "LIFTLOG_DB";
pub const DEFAULT_RECENT_LIMIT: usize = 5;
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Explicit store location; defaults to `liftlog.db` in the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// How many workouts the recent list shows
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recent_limit: Option<usize>,

    /// How many workouts history and history export include
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
}

impl Config {
    /// Loads the configuration, or defaults when no file exists yet.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        serde_json::from_str(&config_str).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Resolved store path: `LIFTLOG_DB`, then `db_path`, then the data directory.
    pub fn db_path(&self) -> Result<PathBuf> {
        if let Some(path) = env::var_os(DB_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => DataStorage::new()
                .get_path(DB_FILE_NAME)
                .map_err(|_| msg_error_anyhow!(Message::DataStoragePathError)),
        }
    }

    pub fn recent_limit(&self) -> usize {
        self.recent_limit.unwrap_or(DEFAULT_RECENT_LIMIT)
    }

    pub fn history_limit(&self) -> usize {
        self.history_limit.unwrap_or(DEFAULT_HISTORY_LIMIT)
    }

    /// Interactive setup, seeded with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let db_path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbPath.to_string())
            .default(
                current
                    .db_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            )
            .allow_empty(true)
            .interact_text()?;

        let recent_limit: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptRecentLimit.to_string())
            .default(current.recent_limit())
            .interact_text()?;

        let history_limit: usize = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptHistoryLimit.to_string())
            .default(current.history_limit())
            .interact_text()?;

        let db_path = db_path.trim();
        Ok(Config {
            db_path: (!db_path.is_empty()).then(|| PathBuf::from(db_path)),
            recent_limit: Some(recent_limit),
            history_limit: Some(history_limit),
        })
    }
}
