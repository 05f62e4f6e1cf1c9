use super::card::Card;
use super::hand::Hand;

/// Lazy iterator over every k-card subset of a card sequence.
///
/// Subsets are produced in lexicographic order of their *positions* in the
/// input slice, never by card value, so duplicate-valued inputs still give
/// distinct subsets. The input is borrowed and never mutated. Each call to
/// [`Combinations::from`] starts a fresh pass.
///
/// State is a single index vector advanced in place, the classic
/// "bump the rightmost index that still has room" successor.
///
/// # Example
///
/// 7 cards choose 5 yields C(7,5) = 21 hands, starting with
/// positions `[0,1,2,3,4]` and ending with `[2,3,4,5,6]`.
pub struct Combinations<'a> {
    cards: &'a [Card],
    index: Vec<usize>,
    remaining: usize,
}

impl<'a> Combinations<'a> {
    /// Binomial coefficient C(n, k) via the multiplicative formula.
    pub fn choose(n: usize, k: usize) -> usize {
        if k > n {
            0
        } else {
            (0..k).fold(1, |x, i| x * (n - i) / (i + 1))
        }
    }
    /// Cards at the current positions.
    fn current(&self) -> Hand {
        self.index.iter().map(|&i| self.cards[i]).collect()
    }
    fn advance(&mut self) {
        let n = self.cards.len();
        let k = self.index.len();
        if let Some(i) = (0..k).rev().find(|&i| self.index[i] < n - k + i) {
            self.index[i] += 1;
            for j in i + 1..k {
                self.index[j] = self.index[j - 1] + 1;
            }
        }
    }
}

impl<'a> From<(&'a [Card], usize)> for Combinations<'a> {
    fn from((cards, k): (&'a [Card], usize)) -> Self {
        Self {
            cards,
            index: (0..k).collect(),
            remaining: Self::choose(cards.len(), k),
        }
    }
}
impl<'a> From<(&'a Hand, usize)> for Combinations<'a> {
    fn from((hand, k): (&'a Hand, usize)) -> Self {
        Self::from((hand.cards(), k))
    }
}

impl Iterator for Combinations<'_> {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            None
        } else {
            let hand = self.current();
            self.remaining -= 1;
            if self.remaining > 0 {
                self.advance();
            }
            Some(hand)
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Combinations<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn seven() -> Hand {
        Hand::try_from("As Kd 9c 9h 4s 3d 2c").unwrap()
    }

    #[test]
    fn seven_choose_five() {
        let hand = seven();
        let subsets = Combinations::from((&hand, 5)).collect::<Vec<Hand>>();
        assert_eq!(subsets.len(), 21);
        assert!(subsets.iter().all(|h| h.size() == 5));
        let distinct = subsets
            .iter()
            .map(|h| h.cards().to_vec())
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(distinct.len(), 21);
    }

    #[test]
    fn positional_order() {
        let hand = Hand::try_from("2c 3c 4c 5c 6c").unwrap();
        let mut iter = Combinations::from((&hand, 3));
        assert_eq!(iter.next(), Some(Hand::try_from("2c3c4c").unwrap()));
        assert_eq!(iter.next(), Some(Hand::try_from("2c3c5c").unwrap()));
        assert_eq!(iter.next(), Some(Hand::try_from("2c3c6c").unwrap()));
        assert_eq!(iter.next(), Some(Hand::try_from("2c4c5c").unwrap()));
        assert_eq!(iter.next(), Some(Hand::try_from("2c4c6c").unwrap()));
        assert_eq!(iter.next(), Some(Hand::try_from("2c5c6c").unwrap()));
        assert_eq!(iter.next(), Some(Hand::try_from("3c4c5c").unwrap()));
        assert_eq!(iter.next(), Some(Hand::try_from("3c4c6c").unwrap()));
        assert_eq!(iter.next(), Some(Hand::try_from("3c5c6c").unwrap()));
        assert_eq!(iter.next(), Some(Hand::try_from("4c5c6c").unwrap()));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn order_follows_position_not_value() {
        let hand = Hand::try_from("Ac 2c Kc").unwrap();
        let subsets = Combinations::from((&hand, 2)).collect::<Vec<Hand>>();
        assert_eq!(
            subsets,
            vec![
                Hand::try_from("Ac2c").unwrap(),
                Hand::try_from("AcKc").unwrap(),
                Hand::try_from("2cKc").unwrap(),
            ]
        );
    }

    #[test]
    fn duplicate_values_stay_distinct() {
        let hand = Hand::try_from("As As As").unwrap();
        assert_eq!(Combinations::from((&hand, 2)).count(), 3);
    }

    #[test]
    fn restartable_and_non_mutating() {
        let hand = seven();
        let first = Combinations::from((&hand, 5)).collect::<Vec<Hand>>();
        let again = Combinations::from((&hand, 5)).collect::<Vec<Hand>>();
        assert_eq!(first, again);
        assert_eq!(hand, seven());
    }

    #[test]
    fn edge_sizes() {
        let hand = Hand::try_from("As Kd 9c").unwrap();
        assert_eq!(Combinations::from((&hand, 0)).collect::<Vec<_>>(), vec![Hand::empty()]);
        assert_eq!(Combinations::from((&hand, 3)).count(), 1);
        assert_eq!(Combinations::from((&hand, 4)).count(), 0);
        assert_eq!(Combinations::from((&hand, 2)).len(), 3);
    }
}
