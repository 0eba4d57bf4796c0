mod common;

use cyclefit::db::{Database, MemoryStorage, STATE_KEY, Storage};
use cyclefit::models::{PlanType, ProfileState};

#[test]
fn test_blob_put_get_overwrite() {
    let (_dir, db) = common::setup_db();
    assert_eq!(db.get_blob("k").unwrap(), None);

    db.put_blob("k", "one").unwrap();
    db.put_blob("k", "two").unwrap();
    assert_eq!(db.get_blob("k").unwrap().as_deref(), Some("two"));
    assert_eq!(db.get_blob("other").unwrap(), None);
}

#[test]
fn test_database_storage_empty_loads_none() {
    let (_dir, db) = common::setup_db();
    assert!(db.load().unwrap().is_none());
}

#[test]
fn test_database_storage_round_trip_under_fixed_key() {
    let (_dir, db) = common::setup_db();
    let state = ProfileState {
        name: "Ada".into(),
        current_workout_plan_type: Some(PlanType::Strength),
        current_workout_level: Some("beginner".into()),
        ..ProfileState::default()
    };
    db.save(&state).unwrap();

    let raw = db.get_blob(STATE_KEY).unwrap().unwrap();
    assert!(raw.contains("\"currentWorkoutPlanType\":\"strength\""));
    assert_eq!(db.load().unwrap(), Some(state));
}

#[test]
fn test_database_storage_corrupt_blob_is_an_error() {
    let (_dir, db) = common::setup_db();
    db.put_blob(STATE_KEY, "not json").unwrap();
    let err = db.load().unwrap_err();
    assert!(err.to_string().contains(STATE_KEY));
}

#[test]
fn test_database_persists_across_reopen() {
    let (dir, db) = common::setup_db();
    db.save(&ProfileState {
        name: "Grace".into(),
        ..ProfileState::default()
    })
    .unwrap();
    drop(db);

    let db = Database::open(&dir.path().join("test.db")).unwrap();
    assert_eq!(db.load().unwrap().unwrap().name, "Grace");
}

#[test]
fn test_in_memory_database_starts_empty() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.load().unwrap().is_none());
}

#[test]
fn test_memory_storage_round_trip() {
    let storage = MemoryStorage::new();
    assert!(storage.load().unwrap().is_none());
    let state = ProfileState {
        onboarding_complete: true,
        ..ProfileState::default()
    };
    storage.save(&state).unwrap();
    assert_eq!(storage.load().unwrap(), Some(state));
}

#[cfg(unix)]
#[test]
fn test_database_file_mode_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;
    let (dir, _db) = common::setup_db();
    let mode = std::fs::metadata(dir.path().join("test.db"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}
