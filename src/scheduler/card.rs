use serde::{Deserialize, Serialize};

use crate::scheduler::types::CardRecord;

/// A schedulable flashcard. Identity is the (front, back) pair and never
/// changes; everything else is progress state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub front: String,
    pub back: String,
    pub num_right: u32,
    pub num_wrong: u32,
    pub bucket: usize,
    pub next_time: f64,
}

impl Card {
    pub fn new(front: impl Into<String>, back: impl Into<String>, next_time: f64) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
            num_right: 0,
            num_wrong: 0,
            bucket: 0,
            next_time,
        }
    }

    pub fn matches(&self, front: &str, back: &str) -> bool {
        self.front == front && self.back == back
    }

    /// Move the bucket one step up or down, clamped to `[0, max_bucket]`,
    /// and bump the matching counter. Rescheduling is the engine's job.
    pub fn apply_outcome(&mut self, correct: bool, max_bucket: usize) {
        if correct {
            self.num_right += 1;
            self.bucket = (self.bucket + 1).min(max_bucket);
        } else {
            self.num_wrong += 1;
            self.bucket = self.bucket.saturating_sub(1);
        }
    }

    /// Overwrite progress from a stored record. A bucket beyond the current
    /// table end (the table may have shrunk since the record was written) is
    /// clamped, never fatal.
    pub fn apply_record(&mut self, record: &CardRecord, max_bucket: usize) {
        if record.bucket > max_bucket {
            tracing::warn!(
                front = %self.front,
                bucket = record.bucket,
                max_bucket,
                "stored bucket out of range, clamping"
            );
        }
        self.num_right = record.num_right;
        self.num_wrong = record.num_wrong;
        self.bucket = record.bucket.min(max_bucket);
        self.next_time = record.next_time;
    }

    pub fn record(&self) -> CardRecord {
        CardRecord {
            num_right: self.num_right,
            num_wrong: self.num_wrong,
            bucket: self.bucket,
            next_time: self.next_time,
        }
    }
}
