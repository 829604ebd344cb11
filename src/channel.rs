//! Device-facing payloads and the session facade.
//!
//! The display device receives the current card plus a one-card lookahead
//! and sends back one answer per presented card. Transport and framing are
//! the messaging collaborator's job; these are the plain data shapes it
//! carries.

use serde::{Deserialize, Serialize};

use crate::scheduler::{SchedulerEngine, SchedulerError, SchedulerResult};

/// Wire value for a correct answer; anything else counts as incorrect.
/// Matches the device firmware's result enum.
pub const RESULT_CORRECT: u8 = 1;

/// Outbound: the card to show now, plus the upcoming one when the deck has
/// more than one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardFrame {
    pub front: String,
    pub back: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_front: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_back: Option<String>,
}

/// Inbound: the device's verdict on one presented card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPayload {
    pub front: String,
    pub back: String,
    pub result: u8,
}

impl AnswerPayload {
    pub fn is_correct(&self) -> bool {
        self.result == RESULT_CORRECT
    }
}

/// One device's view of the scheduler: builds outbound frames and applies
/// inbound answers. Owns the engine; single logical thread of control.
pub struct DeviceSession {
    engine: SchedulerEngine,
}

impl DeviceSession {
    pub fn new(engine: SchedulerEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &SchedulerEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SchedulerEngine {
        &mut self.engine
    }

    /// Frame for the current deck head. Errors only when the deck is empty.
    pub fn current_frame(&self) -> SchedulerResult<CardFrame> {
        let upcoming = self.engine.peek_upcoming(2);
        let head = upcoming.first().ok_or(SchedulerError::EmptyDeck)?;
        let next = upcoming.get(1);
        Ok(CardFrame {
            front: head.front.clone(),
            back: head.back.clone(),
            next_front: next.map(|card| card.front.clone()),
            next_back: next.map(|card| card.back.clone()),
        })
    }

    /// Apply one answer and return the frame to send next. An answer for an
    /// unknown card (stale after a card-set refresh) is absorbed; the device
    /// still gets the current frame.
    pub fn handle_answer(&mut self, payload: &AnswerPayload) -> SchedulerResult<CardFrame> {
        self.engine
            .report_outcome(&payload.front, &payload.back, payload.is_correct())?;
        self.current_frame()
    }
}
