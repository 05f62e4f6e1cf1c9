use pkc_cards::Seeded;
use pkc_core::SIMULATIONS;
use pkc_core::Trials;

/// Run parameters for a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Monte Carlo iterations. Controls estimator variance against runtime.
    pub trials: Trials,
    /// Fixed seed for reproducible runs. `None` draws one from entropy.
    pub seed: Option<u64>,
    /// Worker count. Results are reproducible per (seed, threads) pair.
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trials: SIMULATIONS,
            seed: None,
            threads: 1,
        }
    }
}

impl Config {
    pub fn shuffler(&self) -> Seeded {
        self.seed.map(Seeded::new).unwrap_or_else(Seeded::entropy)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.seed {
            Some(seed) => write!(f, "trials {} seed {}", self.trials, seed)?,
            None => write!(f, "trials {} seed random", self.trials)?,
        }
        write!(f, " threads {}", self.threads)
    }
}
