/// A poker hand category.
///
/// Nine tiers ordered weakest to strongest. This is the only strength
/// signal compared between players: two hands in the same category are
/// tied, whatever their ranks or kickers.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum Ranking {
    #[default]
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOAK = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOAK = 7,
    StraightFlush = 8,
}

impl Ranking {
    pub const MAX: Self = Ranking::StraightFlush;
    pub const fn all() -> [Ranking; 9] {
        [
            Ranking::HighCard,
            Ranking::OnePair,
            Ranking::TwoPair,
            Ranking::ThreeOAK,
            Ranking::Straight,
            Ranking::Flush,
            Ranking::FullHouse,
            Ranking::FourOAK,
            Ranking::StraightFlush,
        ]
    }
}

/// u8 isomorphism over 0..=8
impl From<Ranking> for u8 {
    fn from(r: Ranking) -> u8 {
        r as u8
    }
}
impl TryFrom<u8> for Ranking {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(n as usize)
            .copied()
            .ok_or_else(|| format!("invalid ranking u8: {}", n))
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::HighCard => write!(f, "HighCard"),
            Ranking::OnePair => write!(f, "OnePair"),
            Ranking::TwoPair => write!(f, "TwoPair"),
            Ranking::ThreeOAK => write!(f, "ThreeOfAKind"),
            Ranking::Straight => write!(f, "Straight"),
            Ranking::Flush => write!(f, "Flush"),
            Ranking::FullHouse => write!(f, "FullHouse"),
            Ranking::FourOAK => write!(f, "FourOfAKind"),
            Ranking::StraightFlush => write!(f, "StraightFlush"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for n in 0..=8u8 {
            assert_eq!(u8::from(Ranking::try_from(n).unwrap()), n);
        }
        assert!(Ranking::try_from(9).is_err());
    }

    #[test]
    fn total_order() {
        let all = Ranking::all();
        assert!(all.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(all.iter().max(), Some(&Ranking::MAX));
    }
}
