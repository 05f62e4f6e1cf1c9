use pkc_cards::Strength;
use pkc_core::Trials;

/// Running win and tie counters, one slot per player.
///
/// Each trial credits every player holding the strongest category: a win
/// if they hold it alone, a tie if anyone shares it. Players below the
/// maximum get nothing that trial, and nobody is credited both ways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    wins: Vec<Trials>,
    ties: Vec<Trials>,
    trials: Trials,
}

impl Tally {
    pub fn new(players: usize) -> Self {
        Self {
            wins: vec![0; players],
            ties: vec![0; players],
            trials: 0,
        }
    }
    pub fn wins(&self) -> &[Trials] {
        &self.wins
    }
    pub fn ties(&self) -> &[Trials] {
        &self.ties
    }
    pub fn trials(&self) -> Trials {
        self.trials
    }
    pub fn players(&self) -> usize {
        self.wins.len()
    }
    /// Folds one trial's strengths, given in player order.
    pub fn witness(&mut self, strengths: &[Strength]) {
        debug_assert!(strengths.len() == self.players());
        self.trials += 1;
        if let Some(best) = strengths.iter().max() {
            let shared = strengths.iter().filter(|s| *s == best).count() > 1;
            for (i, strength) in strengths.iter().enumerate() {
                match (strength == best, shared) {
                    (true, true) => self.ties[i] += 1,
                    (true, false) => self.wins[i] += 1,
                    (false, _) => continue,
                }
            }
        }
    }
    /// Sums two tallies over the same players.
    pub fn merge(mut self, other: Self) -> Self {
        debug_assert!(self.players() == other.players());
        self.wins
            .iter_mut()
            .zip(other.wins)
            .for_each(|(a, b)| *a += b);
        self.ties
            .iter_mut()
            .zip(other.ties)
            .for_each(|(a, b)| *a += b);
        self.trials += other.trials;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pkc_cards::Hand;

    fn strength(s: &str) -> Strength {
        Strength::from(Hand::try_from(s).unwrap())
    }

    #[test]
    fn single_winner() {
        let mut tally = Tally::new(3);
        tally.witness(&[
            strength("As Ah Kd Qc Js"),
            strength("As Ah Ad Qc Js"),
            strength("2s 7h Kd Qc Js"),
        ]);
        assert_eq!(tally.wins(), &[0, 1, 0]);
        assert_eq!(tally.ties(), &[0, 0, 0]);
        assert_eq!(tally.trials(), 1);
    }

    #[test]
    fn shared_maximum_is_a_tie() {
        let mut tally = Tally::new(3);
        tally.witness(&[
            strength("As Ah Kd Qc Js"),
            strength("2s 2h Kd Qc Js"),
            strength("2s 7h Kd Qc Js"),
        ]);
        assert_eq!(tally.wins(), &[0, 0, 0]);
        assert_eq!(tally.ties(), &[1, 1, 0]);
    }

    #[test]
    fn lone_player_always_wins() {
        let mut tally = Tally::new(1);
        tally.witness(&[strength("2s 7h Kd Qc Js")]);
        assert_eq!(tally.wins(), &[1]);
        assert_eq!(tally.ties(), &[0]);
    }

    #[test]
    fn merge_sums() {
        let mut a = Tally::new(2);
        let mut b = Tally::new(2);
        a.witness(&[strength("As Ah Kd Qc Js"), strength("2s 7h Kd Qc Js")]);
        b.witness(&[strength("As Ah Kd Qc Js"), strength("2s 2h Kd Qc Js")]);
        b.witness(&[strength("2s 7h Kd Qc Js"), strength("As Ah Kd Qc Js")]);
        let sum = a.merge(b);
        assert_eq!(sum.wins(), &[1, 1]);
        assert_eq!(sum.ties(), &[1, 1]);
        assert_eq!(sum.trials(), 3);
    }
}
