//! Scheduler engine: owns the deck, the virtual clock, and the interval
//! table, and exposes the operation set collaborators drive.
//!
//! All operations are synchronous and short-lived; the engine has no
//! internal concurrency. Callers that share one engine across threads wrap
//! it in a single mutex around all operations.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::scheduler::card::Card;
use crate::scheduler::clock::VirtualClock;
use crate::scheduler::deck::Deck;
use crate::scheduler::intervals::{jitter, IntervalTable};
use crate::scheduler::persistence::ProgressStore;
use crate::scheduler::types::CardContent;
use crate::scheduler::{SchedulerError, SchedulerResult};

pub struct SchedulerEngine {
    intervals: IntervalTable,
    clock: VirtualClock,
    deck: Deck,
    store: Option<Arc<dyn ProgressStore>>,
    rng: StdRng,
}

impl SchedulerEngine {
    pub fn new(intervals: IntervalTable, store: Option<Arc<dyn ProgressStore>>) -> Self {
        Self::with_rng(intervals, store, StdRng::from_os_rng())
    }

    /// Deterministic construction for tests: every jitter draw comes from
    /// the seeded generator.
    pub fn with_seed(
        intervals: IntervalTable,
        store: Option<Arc<dyn ProgressStore>>,
        seed: u64,
    ) -> Self {
        Self::with_rng(intervals, store, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        intervals: IntervalTable,
        store: Option<Arc<dyn ProgressStore>>,
        rng: StdRng,
    ) -> Self {
        let mut clock = VirtualClock::new();
        if let Some(ref store) = store {
            match store.get_clock() {
                Ok(Some(value)) => clock.advance_to(value),
                Ok(None) => {}
                Err(err) => tracing::warn!(error = %err, "failed to restore virtual clock"),
            }
        }

        Self {
            intervals,
            clock,
            deck: Deck::new(),
            store,
            rng,
        }
    }

    pub fn clock_now(&self) -> f64 {
        self.clock.now()
    }

    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    /// The next card to present. Never mutates state.
    pub fn next(&self) -> SchedulerResult<&Card> {
        self.deck.head().ok_or(SchedulerError::EmptyDeck)
    }

    /// First `n` cards in due order; fewer if the deck is shorter.
    pub fn peek_upcoming(&self, n: usize) -> &[Card] {
        self.deck.peek(n)
    }

    pub fn find(&self, front: &str, back: &str) -> Option<&Card> {
        self.deck.find(front, back)
    }

    /// Discard the deck and install a fresh card set. Progress for known
    /// identity keys is reattached from the store; everything else starts at
    /// bucket 0. The only operation that changes which identities exist.
    pub fn replace_all(&mut self, contents: Vec<CardContent>) -> SchedulerResult<()> {
        let count = contents.len();
        let mut cards = Vec::with_capacity(count);
        for content in contents {
            cards.push(self.make_card(content)?);
        }
        self.deck.install(cards);
        tracing::info!(cards = count, "card set replaced");
        Ok(())
    }

    /// Record an answer for the identified card: bump counters, move the
    /// bucket, reschedule, persist. An unknown identity is a silent no-op
    /// (the device may be answering a card from a since-replaced set);
    /// returns whether an outcome was applied.
    pub fn report_outcome(
        &mut self,
        front: &str,
        back: &str,
        correct: bool,
    ) -> SchedulerResult<bool> {
        let max_bucket = self.intervals.max_bucket();
        let Some(card) = self.deck.find_mut(front, back) else {
            tracing::debug!(front, back, "outcome for unknown card ignored");
            return Ok(false);
        };

        card.apply_outcome(correct, max_bucket);

        // The answered card's own due time is the canonical "now" for this
        // decision; advance before computing the new delay.
        self.clock.advance_to(card.next_time);
        let base = self.intervals.base_interval(card.bucket)?;
        let delay = jitter(base, &mut self.rng);
        card.next_time = self.clock.now() + delay;

        tracing::debug!(
            front = %card.front,
            correct,
            bucket = card.bucket,
            next_time = card.next_time,
            "outcome recorded"
        );

        let updated = card.clone();
        self.deck.resort();
        self.persist(&updated);
        Ok(true)
    }

    fn make_card(&mut self, content: CardContent) -> SchedulerResult<Card> {
        let base = self.intervals.base_interval(0)?;
        let due = self.clock.now() + jitter(base, &mut self.rng);
        let mut card = Card::new(content.front, content.back, due);

        if let Some(ref store) = self.store {
            match store.get(&card.front, &card.back) {
                Ok(Some(record)) => card.apply_record(&record, self.intervals.max_bucket()),
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(error = %err, front = %card.front, "failed to load card progress")
                }
            }
        }

        Ok(card)
    }

    /// Best-effort write-back; a failing store costs durability, not
    /// scheduling.
    fn persist(&self, card: &Card) {
        let Some(store) = self.store.as_ref() else {
            return;
        };

        if let Err(err) = store.put(&card.front, &card.back, &card.record()) {
            tracing::warn!(error = %err, front = %card.front, "failed to persist card progress");
        }
        if let Err(err) = store.set_clock(self.clock.now()) {
            tracing::warn!(error = %err, "failed to persist virtual clock");
        }
    }
}
