use super::config::Config;
use super::error::EquityError;
use super::error::InputError;
use super::report::Report;
use super::tally::Tally;
use pkc_cards::*;
use pkc_core::*;
use rayon::prelude::*;

/// Monte Carlo equity estimator for a fixed set of known cards.
///
/// Construction is the validation step: a `Simulator` only exists for
/// well-formed input, so trials never have to re-check it. Each trial
/// rebuilds the deck, removes the known cards, shuffles, completes the
/// board, and folds every player's best category into a [`Tally`].
///
/// Workers each own an independent [`Shuffler`] stream and their tallies
/// are summed in worker order once all of them finish.
#[derive(Debug, Clone)]
pub struct Simulator {
    players: Vec<Hole>,
    board: Board,
}

impl Simulator {
    /// Most players one deck can serve once the board is complete.
    pub const MAX_PLAYERS: usize = (DECK_SIZE - BOARD_SIZE) / HOLE_SIZE;

    pub fn new(players: Vec<Hand>, board: Hand) -> Result<Self, EquityError> {
        if players.is_empty() {
            return Err(InputError::NoPlayers.into());
        }
        if players.len() > Self::MAX_PLAYERS {
            return Err(InputError::TooManyPlayers {
                players: players.len(),
                max: Self::MAX_PLAYERS,
            }
            .into());
        }
        let players = players
            .into_iter()
            .enumerate()
            .map(|(player, hand)| {
                let size = hand.size();
                Hole::try_from(hand).map_err(|_| InputError::HoleSize { player, size })
            })
            .collect::<Result<Vec<Hole>, InputError>>()?;
        let size = board.size();
        let board = Board::try_from(board).map_err(|_| InputError::BoardSize(size))?;
        if let Some(card) = players
            .iter()
            .flat_map(|hole| hole.cards())
            .chain(board.cards())
            .copied()
            .collect::<Hand>()
            .duplicate()
        {
            return Err(InputError::Duplicate(card).into());
        }
        log::debug!(
            "{:<32}{:<32}",
            format!("players {}", players.len()),
            format!("board {}", board)
        );
        Ok(Self { players, board })
    }

    pub fn players(&self) -> &[Hole] {
        &self.players
    }
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs `config.trials` trials with the configured seed and workers.
    pub fn run(&self, config: &Config) -> Result<Report, EquityError> {
        let shuffler = config.shuffler();
        log::info!(
            "{:<32}{:<32}",
            format!("simulating {} trials", config.trials),
            format!("seed {}", shuffler.seed())
        );
        self.run_with(&shuffler, config.trials, config.threads)
    }

    /// Splits `trials` across `threads` workers, worker `i` drawing from
    /// `shuffler.fork(i)`.
    pub fn run_with<S: Shuffler>(
        &self,
        shuffler: &S,
        trials: Trials,
        threads: usize,
    ) -> Result<Report, EquityError> {
        self.run_until(shuffler, trials, threads, pkc_core::interrupted)
    }

    /// As [`Simulator::run_with`], but every worker polls `stop` between
    /// batches instead of the process-wide interrupt flag.
    pub fn run_until<S, F>(
        &self,
        shuffler: &S,
        trials: Trials,
        threads: usize,
        stop: F,
    ) -> Result<Report, EquityError>
    where
        S: Shuffler,
        F: Fn() -> bool + Sync,
    {
        let threads = threads.max(1);
        let start = std::time::Instant::now();
        let tally = (0..threads)
            .map(|i| (shuffler.fork(i as u64), Self::share(trials, threads, i)))
            .collect::<Vec<(S, Trials)>>()
            .into_par_iter()
            .map(|(mut stream, share)| self.simulate_until(&mut stream, share, &stop))
            .collect::<Result<Vec<Tally>, EquityError>>()?
            .into_iter()
            .fold(Tally::new(self.players.len()), Tally::merge);
        let secs = start.elapsed().as_secs_f64().max(f64::EPSILON);
        log::info!(
            "{:<32}{:<32}",
            format!("completed {} trials", tally.trials()),
            format!("{:.0} trials/sec", tally.trials() as f64 / secs)
        );
        let report = Report::from((tally, trials));
        if report.partial() {
            log::warn!("interrupted after {} of {} trials", report.trials(), trials);
        }
        Ok(report)
    }

    /// Runs up to `trials` trials on one stream, in batches, stopping early
    /// only when an interrupt is requested between batches.
    pub fn simulate<S: Shuffler>(
        &self,
        shuffler: &mut S,
        trials: Trials,
    ) -> Result<Tally, EquityError> {
        self.simulate_until(shuffler, trials, &pkc_core::interrupted)
    }

    /// Batched trial loop. `stop` is checked before each batch, so a
    /// stopped stream has completed a whole number of batches.
    pub fn simulate_until<S, F>(
        &self,
        shuffler: &mut S,
        trials: Trials,
        stop: &F,
    ) -> Result<Tally, EquityError>
    where
        S: Shuffler,
        F: Fn() -> bool,
    {
        let mut tally = Tally::new(self.players.len());
        while tally.trials() < trials {
            if stop() {
                break;
            }
            let batch = BATCH_SIZE.min(trials - tally.trials());
            for _ in 0..batch {
                tally.witness(&self.trial(shuffler)?);
            }
            log::trace!("batch of {} done, {} of {}", batch, tally.trials(), trials);
        }
        Ok(tally)
    }

    /// One random completion of the board, returning each player's
    /// best category in player order.
    pub fn trial<S: Shuffler>(&self, shuffler: &mut S) -> Result<Vec<Strength>, EquityError> {
        let mut deck = Deck::new();
        deck.remove_known(&self.players, &self.board);
        deck.shuffle(shuffler);
        let missing = self.board.missing();
        let available = deck.size();
        let turn = deck.deal(missing).ok_or(EquityError::Exhausted {
            missing: missing.saturating_sub(available),
        })?;
        let mut board = self.board.clone();
        board.add(turn);
        Ok(self
            .players
            .iter()
            .map(|hole| Strength::from((hole, &board)))
            .collect())
    }

    /// Trials assigned to worker `i`; the first `trials % threads` take one extra.
    fn share(trials: Trials, threads: usize, i: usize) -> Trials {
        let threads = threads as Trials;
        let i = i as Trials;
        trials / threads + if i < trials % threads { 1 } else { 0 }
    }
}
