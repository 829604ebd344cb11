//! Persistence seam for card progress and the virtual clock.
//!
//! The engine consults the store when cards are (re)created and writes back
//! after every outcome; storage failures are logged and absorbed so a broken
//! store degrades to session-only scheduling.

use crate::scheduler::types::CardRecord;
use crate::storage::StorageResult;

pub trait ProgressStore: Send + Sync {
    /// Stored progress for the identity key, if any.
    fn get(&self, front: &str, back: &str) -> StorageResult<Option<CardRecord>>;

    fn put(&self, front: &str, back: &str, record: &CardRecord) -> StorageResult<()>;

    /// Last persisted virtual clock value, if any.
    fn get_clock(&self) -> StorageResult<Option<f64>>;

    fn set_clock(&self, value: f64) -> StorageResult<()>;
}
