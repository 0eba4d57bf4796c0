#![allow(dead_code)]

use chrono::NaiveDate;
use cyclefit::core::store::CycleStore;
use cyclefit::db::{Database, MemoryStorage};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

/// Fresh store backed by in-memory storage.
pub fn memory_store() -> CycleStore<MemoryStorage> {
    CycleStore::open(MemoryStorage::new()).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
