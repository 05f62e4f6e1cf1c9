use super::board::Board;
use super::combinations::Combinations;
use super::evaluator::Evaluator;
use super::hand::Hand;
use super::hole::Hole;
use super::ranking::Ranking;
use pkc_core::HAND_SIZE;

/// The best category reachable from a set of cards.
///
/// Every five-card subset is classified and the maximum kept, so a
/// seven-card hand (two hole + five board) is 21 evaluations. Pure in
/// its input; hands with fewer than five cards are [`Ranking::HighCard`].
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength(Ranking);

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.0
    }
}

impl From<&Hand> for Strength {
    fn from(hand: &Hand) -> Self {
        Self(
            Combinations::from((hand, HAND_SIZE))
                .map(|five| Evaluator::from(&five).find_ranking())
                .max()
                .unwrap_or_default(),
        )
    }
}
impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(&hand)
    }
}
impl From<(&Hole, &Board)> for Strength {
    fn from((hole, board): (&Hole, &Board)) -> Self {
        Self::from(
            hole.cards()
                .iter()
                .chain(board.cards())
                .copied()
                .collect::<Hand>(),
        )
    }
}

impl From<Strength> for Ranking {
    fn from(strength: Strength) -> Self {
        strength.0
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
