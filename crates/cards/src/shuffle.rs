use super::card::Card;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use std::hash::Hash;
use std::hash::Hasher;

/// Source of random permutations for dealing.
///
/// The simulator never touches a global RNG. It is handed a `Shuffler`
/// and derives one independent stream per worker with [`Shuffler::fork`],
/// so runs are reproducible and tests can plug in a fixed permutation.
pub trait Shuffler: Send + Sized {
    /// Permutes `cards` in place.
    fn shuffle(&mut self, cards: &mut [Card]);
    /// Independent stream for worker `stream`. Equal inputs give equal streams.
    fn fork(&self, stream: u64) -> Self;
}

/// Uniform shuffler backed by a seeded [`SmallRng`].
#[derive(Debug, Clone)]
pub struct Seeded {
    seed: u64,
    rng: SmallRng,
}

impl Seeded {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }
    /// Seeds from the thread-local RNG for non-reproducible runs.
    pub fn entropy() -> Self {
        Self::new(rand::random::<u64>())
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Shuffler for Seeded {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }
    fn fork(&self, stream: u64) -> Self {
        let ref mut hasher = std::hash::DefaultHasher::new();
        self.seed.hash(hasher);
        stream.hash(hasher);
        Self::new(hasher.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<Card> {
        (0..52u8).map(Card::from).collect()
    }

    #[test]
    fn reproducible() {
        let mut a = cards();
        let mut b = cards();
        Seeded::new(7).shuffle(&mut a);
        Seeded::new(7).shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn permutation() {
        let mut shuffled = cards();
        Seeded::new(11).shuffle(&mut shuffled);
        shuffled.sort();
        assert_eq!(shuffled, cards());
    }

    #[test]
    fn forks_diverge() {
        let root = Seeded::new(3);
        let mut a = cards();
        let mut b = cards();
        root.fork(0).shuffle(&mut a);
        root.fork(1).shuffle(&mut b);
        assert_ne!(a, b);
        assert_eq!(root.fork(5).seed(), root.fork(5).seed());
    }
}
