//! SQLite progress store tests on throwaway databases.

use std::sync::Arc;

use tempfile::TempDir;

use flashdeck_host::scheduler::types::{CardContent, CardRecord};
use flashdeck_host::scheduler::{IntervalTable, ProgressStore, SchedulerEngine};
use flashdeck_host::storage::SqliteStore;

fn sample_record() -> CardRecord {
    CardRecord {
        num_right: 4,
        num_wrong: 1,
        bucket: 2,
        next_time: 31.5,
    }
}

#[test]
fn get_on_unknown_key_is_none() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.get("f", "b").unwrap(), None);
}

#[test]
fn put_then_get_round_trips() {
    let store = SqliteStore::open_in_memory().unwrap();
    let record = sample_record();
    store.put("f", "b", &record).unwrap();
    assert_eq!(store.get("f", "b").unwrap(), Some(record));
}

#[test]
fn put_overwrites_existing_progress() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.put("f", "b", &sample_record()).unwrap();

    let updated = CardRecord {
        num_right: 5,
        num_wrong: 1,
        bucket: 3,
        next_time: 120.0,
    };
    store.put("f", "b", &updated).unwrap();
    assert_eq!(store.get("f", "b").unwrap(), Some(updated));
}

#[test]
fn keys_are_the_full_identity_pair() {
    let store = SqliteStore::open_in_memory().unwrap();
    store.put("f", "b", &sample_record()).unwrap();
    assert_eq!(store.get("f", "other").unwrap(), None);
    assert_eq!(store.get("other", "b").unwrap(), None);
}

#[test]
fn clock_round_trips_and_starts_absent() {
    let store = SqliteStore::open_in_memory().unwrap();
    assert_eq!(store.get_clock().unwrap(), None);

    store.set_clock(17.25).unwrap();
    assert_eq!(store.get_clock().unwrap(), Some(17.25));

    store.set_clock(42.0).unwrap();
    assert_eq!(store.get_clock().unwrap(), Some(42.0));
}

#[test]
fn records_survive_reopening_the_database_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("progress.db");

    {
        let store = SqliteStore::open(&path).unwrap();
        store.put("f", "b", &sample_record()).unwrap();
        store.set_clock(9.5).unwrap();
    }

    let store = SqliteStore::open(&path).unwrap();
    assert_eq!(store.get("f", "b").unwrap(), Some(sample_record()));
    assert_eq!(store.get_clock().unwrap(), Some(9.5));
}

#[test]
fn open_creates_missing_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("dirs").join("progress.db");
    let store = SqliteStore::open(&path).unwrap();
    store.set_clock(1.0).unwrap();
    assert!(path.exists());
}

#[test]
fn engine_progress_survives_restart_on_the_same_database() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("progress.db");
    let contents = vec![CardContent::new("riesling", "sweet white")];

    let (saved_clock, saved_bucket) = {
        let store = Arc::new(SqliteStore::open(&path).unwrap());
        let mut engine = SchedulerEngine::with_seed(IntervalTable::default(), Some(store), 21);
        engine.replace_all(contents.clone()).unwrap();
        engine.report_outcome("riesling", "sweet white", true).unwrap();
        engine.report_outcome("riesling", "sweet white", true).unwrap();
        (
            engine.clock_now(),
            engine.find("riesling", "sweet white").unwrap().bucket,
        )
    };

    let store = Arc::new(SqliteStore::open(&path).unwrap());
    let mut engine = SchedulerEngine::with_seed(IntervalTable::default(), Some(store), 22);
    assert_eq!(engine.clock_now(), saved_clock);

    engine.replace_all(contents).unwrap();
    let card = engine.find("riesling", "sweet white").unwrap();
    assert_eq!(card.bucket, saved_bucket);
    assert_eq!(card.num_right, 2);
}
