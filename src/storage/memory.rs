use std::collections::HashMap;

use parking_lot::Mutex;

use crate::scheduler::persistence::ProgressStore;
use crate::scheduler::types::CardRecord;
use crate::storage::StorageResult;

/// In-memory progress store. Nothing survives the process; useful for tests
/// and for running without a database.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    records: HashMap<(String, String), CardRecord>,
    clock: Option<f64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, front: &str, back: &str) -> StorageResult<Option<CardRecord>> {
        let inner = self.inner.lock();
        Ok(inner
            .records
            .get(&(front.to_string(), back.to_string()))
            .cloned())
    }

    fn put(&self, front: &str, back: &str, record: &CardRecord) -> StorageResult<()> {
        let mut inner = self.inner.lock();
        inner
            .records
            .insert((front.to_string(), back.to_string()), record.clone());
        Ok(())
    }

    fn get_clock(&self) -> StorageResult<Option<f64>> {
        Ok(self.inner.lock().clock)
    }

    fn set_clock(&self, value: f64) -> StorageResult<()> {
        self.inner.lock().clock = Some(value);
        Ok(())
    }
}
