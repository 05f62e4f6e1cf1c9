use anyhow::Context;
use clap::Parser;
use pkc_cards::Hand;
use pkc_equity::Config;

/// Reference scenario when no players are given: AA vs KK on a 2-7-9 flop.
const DEFAULT_PLAYERS: [&str; 2] = ["AcAd", "KhKs"];
const DEFAULT_BOARD: &str = "2c7d9h";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Estimate hold'em win/tie equity by Monte Carlo simulation",
    long_about = None
)]
pub struct Args {
    /// Hole cards for one player, e.g. "AsKd". Repeat once per player.
    #[arg(short, long = "player", value_name = "CARDS")]
    pub players: Vec<String>,
    /// Known community cards, e.g. "2c7d9h". Zero to five cards.
    #[arg(short, long, value_name = "CARDS")]
    pub board: Option<String>,
    /// Number of Monte Carlo trials.
    #[arg(short = 'n', long, default_value_t = pkc_core::SIMULATIONS)]
    pub trials: u64,
    /// Seed for a reproducible run.
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Worker threads. Defaults to the number of logical CPUs.
    #[arg(short, long)]
    pub threads: Option<usize>,
    /// Print the report as JSON.
    #[arg(long)]
    pub json: bool,
}

impl Args {
    /// Hole hands in input order, falling back to the reference scenario.
    pub fn players(&self) -> anyhow::Result<Vec<Hand>> {
        match self.players.is_empty() {
            true => DEFAULT_PLAYERS.iter().map(|s| Self::cards(s)).collect(),
            false => self.players.iter().map(|s| Self::cards(s)).collect(),
        }
    }
    pub fn board(&self) -> anyhow::Result<Hand> {
        match (&self.board, self.players.is_empty()) {
            (Some(board), _) => Self::cards(board),
            (None, true) => Self::cards(DEFAULT_BOARD),
            (None, false) => Ok(Hand::empty()),
        }
    }
    pub fn config(&self) -> Config {
        Config {
            trials: self.trials,
            seed: self.seed,
            threads: self.threads.unwrap_or_else(num_cpus::get),
        }
    }
    fn cards(s: &str) -> anyhow::Result<Hand> {
        Hand::try_from(s)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("parsing cards {:?}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("equity").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn reference_scenario() {
        let args = parse(&[]);
        assert_eq!(args.players().unwrap().len(), 2);
        assert_eq!(args.board().unwrap(), Hand::try_from("2c7d9h").unwrap());
        assert_eq!(args.config().trials, 100_000);
    }

    #[test]
    fn explicit_players_start_preflop() {
        let args = parse(&["-p", "AsKs", "--player", "QhQd", "-n", "500", "-s", "3", "-t", "2"]);
        assert_eq!(
            args.players().unwrap(),
            vec![Hand::try_from("AsKs").unwrap(), Hand::try_from("QhQd").unwrap()]
        );
        assert_eq!(args.board().unwrap(), Hand::empty());
        assert_eq!(
            args.config(),
            Config {
                trials: 500,
                seed: Some(3),
                threads: 2
            }
        );
    }

    #[test]
    fn bad_cards() {
        let args = parse(&["-p", "AsXs"]);
        assert!(args.players().is_err());
    }
}
