use super::card::Card;

/// An ordered sequence of cards.
///
/// Evaluation treats a Hand as a set, but construction order is kept so
/// subsets can be enumerated by position and hands print the way they
/// were entered. Concatenation via [`Hand::add`] appends, it never reorders.
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq)]
pub struct Hand(Vec<Card>);

impl Hand {
    pub fn empty() -> Self {
        Self(Vec::new())
    }
    /// Concatenates two hands, lhs cards first.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        let mut cards = lhs.0;
        cards.extend(rhs.0);
        Self(cards)
    }
    pub fn size(&self) -> usize {
        self.0.len()
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }
    /// First card that appears more than once, scanning in order.
    pub fn duplicate(&self) -> Option<Card> {
        let mut seen = 0u64;
        for card in self.iter() {
            let bit = 1u64 << u8::from(*card);
            if seen & bit != 0 {
                return Some(*card);
            }
            seen |= bit;
        }
        None
    }
}

/// Vec<Card> isomorphism
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}
impl From<Hand> for Vec<Card> {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}
impl From<&[Card]> for Hand {
    fn from(cards: &[Card]) -> Self {
        Self(cards.to_vec())
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// str isomorphism
/// this follows from Vec<Card> isomorphism
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Card::parse(s).map(Self)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in self.iter() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}
