use super::card::Card;
use super::hand::Hand;
use super::ranking::Ranking;
use pkc_core::HAND_SIZE;

/// Classifies exactly five cards into a [`Ranking`].
///
/// Cards are copied and sorted by rank, highest first; the caller's
/// hand is untouched. Categories are tested strongest first and the
/// first match wins, which is what keeps overlapping definitions
/// (a full house also contains trips and a pair) unambiguous.
///
/// Straights are five consecutive descending ranks with the ace high
/// only. The wheel A-2-3-4-5 is not a straight here.
pub struct Evaluator([Card; HAND_SIZE]);

impl From<&[Card]> for Evaluator {
    fn from(cards: &[Card]) -> Self {
        debug_assert!(
            cards.len() == HAND_SIZE,
            "evaluator takes {} cards, got {}",
            HAND_SIZE,
            cards.len()
        );
        let mut sorted = [cards[0]; HAND_SIZE];
        sorted.copy_from_slice(cards);
        sorted.sort_by(|a, b| b.rank().cmp(&a.rank()));
        Self(sorted)
    }
}
impl From<&Hand> for Evaluator {
    fn from(hand: &Hand) -> Self {
        Self::from(hand.cards())
    }
}
impl From<Hand> for Evaluator {
    fn from(hand: Hand) -> Self {
        Self::from(&hand)
    }
}

impl Evaluator {
    pub fn find_ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_4_oak())
            .or_else(|| self.find_3_oak_2_oak())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_3_oak())
            .or_else(|| self.find_2_oak_2_oak())
            .or_else(|| self.find_2_oak())
            .unwrap_or(Ranking::HighCard)
    }

    fn find_straight_flush(&self) -> Option<Ranking> {
        (self.is_straight() && self.is_flush()).then_some(Ranking::StraightFlush)
    }
    fn find_4_oak(&self) -> Option<Ranking> {
        self.has_n_oak(4).then_some(Ranking::FourOAK)
    }
    fn find_3_oak_2_oak(&self) -> Option<Ranking> {
        (self.has_n_oak(3) && self.has_n_oak(2)).then_some(Ranking::FullHouse)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.is_flush().then_some(Ranking::Flush)
    }
    fn find_straight(&self) -> Option<Ranking> {
        self.is_straight().then_some(Ranking::Straight)
    }
    fn find_3_oak(&self) -> Option<Ranking> {
        self.has_n_oak(3).then_some(Ranking::ThreeOAK)
    }
    fn find_2_oak_2_oak(&self) -> Option<Ranking> {
        (self.n_pairs() == 2).then_some(Ranking::TwoPair)
    }
    fn find_2_oak(&self) -> Option<Ranking> {
        (self.n_pairs() == 1).then_some(Ranking::OnePair)
    }

    fn is_flush(&self) -> bool {
        self.0.iter().all(|c| c.suit() == self.0[0].suit())
    }
    fn is_straight(&self) -> bool {
        self.0
            .windows(2)
            .all(|w| w[0].rank().value() == w[1].rank().value() + 1)
    }
    /// Occurrences per pip value, indexed 0..=14 (slots 0 and 1 unused).
    fn counts(&self) -> [u8; 15] {
        let mut counts = [0u8; 15];
        for card in self.0.iter() {
            counts[card.rank().value() as usize] += 1;
        }
        counts
    }
    fn has_n_oak(&self, n: u8) -> bool {
        self.counts().contains(&n)
    }
    fn n_pairs(&self) -> usize {
        self.counts().iter().filter(|&&c| c == 2).count()
    }
}
