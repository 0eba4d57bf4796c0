pub mod config;
pub mod data;
pub mod history;
pub mod init;
pub mod log;
pub mod plan;
pub mod show;
pub mod status;
pub mod tip;

use anyhow::Result;
use chrono::{Local, NaiveDate};

use cyclefit::core::store::CycleStore;
use cyclefit::db::Database;
use cyclefit::models::config::Config;

/// Load config and rehydrate the store from the standard database path.
pub fn open_store() -> Result<(Config, CycleStore<Database>)> {
    let config = Config::load()?;
    let db = Database::open(&Config::db_path())?;
    let store = CycleStore::open(db)?;
    Ok((config, store))
}

/// `--date` if given, else the local calendar date.
pub fn today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
