//! Spaced-repetition scheduling core.
//!
//! A card lives in a bucket indexing a fixed interval table; answering it
//! moves the bucket up or down and reschedules the card on a virtual clock
//! that only ever advances to the due time of the card just answered. The
//! deck keeps all cards ordered by due time, so its head is always the next
//! card to present.

pub mod card;
pub mod clock;
pub mod deck;
pub mod engine;
pub mod intervals;
pub mod persistence;
pub mod types;

pub use card::Card;
pub use clock::VirtualClock;
pub use deck::Deck;
pub use engine::SchedulerEngine;
pub use intervals::{jitter, IntervalTable};
pub use persistence::ProgressStore;
pub use types::{CardContent, CardRecord};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedulerError {
    #[error("deck is empty")]
    EmptyDeck,

    #[error("bucket {bucket} out of range (max {max})")]
    BucketOutOfRange { bucket: usize, max: usize },
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;
