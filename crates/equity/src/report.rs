use super::tally::Tally;
use pkc_core::Probability;
use pkc_core::Trials;

/// Win and tie percentages for one player.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Equity {
    pub win: Probability,
    pub tie: Probability,
}

/// Final per-player equities in input order.
///
/// Ties are credited to every tied player, so tie percentages overlap
/// across players: summed over the table, win + tie lands between 100%
/// and 100% times the player count. A report built from fewer trials
/// than requested is flagged `partial`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Report {
    equities: Vec<Equity>,
    trials: Trials,
    partial: bool,
}

impl Report {
    pub fn equities(&self) -> &[Equity] {
        &self.equities
    }
    pub fn trials(&self) -> Trials {
        self.trials
    }
    pub fn partial(&self) -> bool {
        self.partial
    }
    fn percent(count: Trials, trials: Trials) -> Probability {
        match trials {
            0 => 0.0,
            n => 100.0 * count as Probability / n as Probability,
        }
    }
}

/// (completed tally, requested trial count)
impl From<(Tally, Trials)> for Report {
    fn from((tally, requested): (Tally, Trials)) -> Self {
        let trials = tally.trials();
        Self {
            equities: tally
                .wins()
                .iter()
                .zip(tally.ties())
                .map(|(&w, &t)| Equity {
                    win: Self::percent(w, trials),
                    tie: Self::percent(t, trials),
                })
                .collect(),
            trials,
            partial: trials < requested,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Results:")?;
        for (i, equity) in self.equities.iter().enumerate() {
            writeln!(
                f,
                "Player {} | Win: {:.2}% | Tie: {:.2}%",
                i + 1,
                equity.win,
                equity.tie
            )?;
        }
        if self.partial {
            writeln!(f, "(partial run: {} trials completed)", self.trials)?;
        }
        Ok(())
    }
}
