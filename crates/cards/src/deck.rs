use super::board::Board;
use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use super::rank::Rank;
use super::shuffle::Shuffler;
use super::suit::Suit;

/// The cards not yet seen by anyone.
///
/// A fresh deck holds all 52 cards in rank-major order. Known cards are
/// filtered out, the rest is shuffled, and [`Deck::deal`] takes from the
/// front. Position carries no meaning until the deck has been shuffled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(
            Rank::all()
                .into_iter()
                .flat_map(|rank| Suit::all().map(|suit| Card::from((rank, suit))))
                .collect(),
        )
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Removes a specific card. Absent cards are ignored.
    pub fn remove(&mut self, card: &Card) {
        self.0.retain(|c| c != card);
    }
    /// Removes every hole card and board card.
    pub fn remove_known(&mut self, players: &[Hole], board: &Board) {
        let known = players
            .iter()
            .flat_map(|hole| hole.cards())
            .chain(board.cards())
            .map(|card| 1u64 << u8::from(*card))
            .fold(0u64, |a, b| a | b);
        self.0.retain(|card| known & (1u64 << u8::from(*card)) == 0);
    }
    /// Permutes the remaining cards.
    pub fn shuffle<S: Shuffler>(&mut self, shuffler: &mut S) {
        shuffler.shuffle(&mut self.0);
    }
    /// Takes `n` cards off the front, or `None` if fewer remain.
    pub fn deal(&mut self, n: usize) -> Option<Hand> {
        if n > self.0.len() {
            None
        } else {
            Some(Hand::from(self.0.drain(..n).collect::<Vec<Card>>()))
        }
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        Hand::from(deck.0)
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.deal(1).and_then(|hand| hand.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::*;

    #[test]
    fn fresh_deck() {
        let deck = Deck::new();
        assert_eq!(deck.size(), 52);
        let mut seen = std::collections::HashSet::new();
        for card in deck.clone() {
            assert!((2..=14).contains(&card.rank().value()));
            assert!(u8::from(card.suit()) <= 3);
            assert!(seen.insert((card.rank(), card.suit())));
        }
        assert_eq!(seen.len(), 52);
    }

    #[test]
    fn fresh_deck_is_rank_major() {
        assert!((0..52u8).map(Card::from).eq(Deck::new()));
    }

    #[test]
    fn removes_known_cards() {
        let players = vec![
            Hole::try_from("AcAd").unwrap(),
            Hole::try_from("KhKs").unwrap(),
        ];
        let board = Board::try_from("2c7d9h").unwrap();
        let mut deck = Deck::new();
        deck.remove_known(&players, &board);
        assert_eq!(deck.size(), 52 - 7);
        assert!(!deck.contains(&Card::try_from("Ac").unwrap()));
        assert!(!deck.contains(&Card::try_from("9h").unwrap()));
        assert!(deck.contains(&Card::try_from("Ah").unwrap()));
    }

    #[test]
    fn removal_is_idempotent() {
        let ace = Card::try_from("As").unwrap();
        let mut deck = Deck::new();
        deck.remove(&ace);
        deck.remove(&ace);
        assert_eq!(deck.size(), 51);
    }

    #[test]
    fn deals_from_front() {
        let mut deck = Deck::new();
        let hand = deck.deal(3).unwrap();
        assert_eq!(hand, Hand::try_from("2c2d2h").unwrap());
        assert_eq!(deck.size(), 49);
        assert_eq!(deck.deal(50), None);
        assert_eq!(deck.size(), 49);
        assert_eq!(deck.deal(0), Some(Hand::empty()));
    }
}
