use super::card::Card;
use super::hand::Hand;
use pkc_core::HOLE_SIZE;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two cards are present.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct Hole(Hand);

impl Hole {
    pub fn cards(&self) -> &[Card] {
        self.0.cards()
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Hand> for Hole {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            HOLE_SIZE => Ok(Self(hand)),
            n => Err(format!("hole must contain exactly two cards, got {}", n)),
        }
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_two() {
        assert!(Hole::try_from("AsAh").is_ok());
        assert!(Hole::try_from("As").is_err());
        assert!(Hole::try_from("AsAhAd").is_err());
    }
}
