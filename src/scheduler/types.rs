use serde::{Deserialize, Serialize};

/// The two faces of a card as delivered by a card-set source. The pair is
/// the card's identity; no surrogate id exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardContent {
    pub front: String,
    pub back: String,
}

impl CardContent {
    pub fn new(front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            front: front.into(),
            back: back.into(),
        }
    }
}

/// Persisted per-card progress, keyed externally by the (front, back) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub num_right: u32,
    pub num_wrong: u32,
    pub bucket: usize,
    pub next_time: f64,
}
