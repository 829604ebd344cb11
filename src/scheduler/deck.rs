use crate::scheduler::card::Card;

/// The working set of cards, kept in ascending `next_time` order. The head
/// is always the next card to present.
///
/// Order is restored with a stable full re-sort after every mutation; cards
/// with equal due times keep their relative order.
#[derive(Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn head(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// First `n` cards in due order, fewer if the deck is shorter.
    pub fn peek(&self, n: usize) -> &[Card] {
        &self.cards[..n.min(self.cards.len())]
    }

    pub fn find(&self, front: &str, back: &str) -> Option<&Card> {
        self.cards.iter().find(|card| card.matches(front, back))
    }

    pub fn find_mut(&mut self, front: &str, back: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.matches(front, back))
    }

    /// Replace the whole deck and restore order.
    pub fn install(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.resort();
    }

    pub fn resort(&mut self) {
        self.cards
            .sort_by(|a, b| a.next_time.total_cmp(&b.next_time));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(front: &str, next_time: f64) -> Card {
        Card::new(front, "back", next_time)
    }

    #[test]
    fn install_sorts_by_next_time() {
        let mut deck = Deck::new();
        deck.install(vec![card("c", 3.0), card("a", 1.0), card("b", 2.0)]);
        let order: Vec<&str> = deck.cards().iter().map(|c| c.front.as_str()).collect();
        assert_eq!(order, ["a", "b", "c"]);
        assert_eq!(deck.head().unwrap().front, "a");
    }

    #[test]
    fn resort_is_stable_on_equal_due_times() {
        let mut deck = Deck::new();
        deck.install(vec![card("first", 1.0), card("second", 1.0), card("third", 1.0)]);
        deck.resort();
        deck.resort();
        let order: Vec<&str> = deck.cards().iter().map(|c| c.front.as_str()).collect();
        assert_eq!(order, ["first", "second", "third"]);
    }

    #[test]
    fn peek_is_bounded_by_deck_size() {
        let mut deck = Deck::new();
        deck.install(vec![card("a", 1.0), card("b", 2.0)]);
        assert_eq!(deck.peek(5).len(), 2);
        assert_eq!(deck.peek(1).len(), 1);
        assert!(Deck::new().peek(2).is_empty());
    }

    #[test]
    fn find_matches_both_faces() {
        let mut deck = Deck::new();
        deck.install(vec![Card::new("front", "back", 1.0)]);
        assert!(deck.find("front", "back").is_some());
        assert!(deck.find("front", "other").is_none());
        assert!(deck.find("other", "back").is_none());
    }
}
