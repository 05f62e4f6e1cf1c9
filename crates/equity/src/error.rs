use pkc_cards::Card;
use pkc_core::Position;

/// Malformed simulation input, caught before any trial runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("at least one player is required")]
    NoPlayers,
    #[error("{players} players cannot all be dealt in, at most {max} fit one deck")]
    TooManyPlayers { players: usize, max: usize },
    #[error("player {} holds {size} cards, expected 2", .player + 1)]
    HoleSize { player: Position, size: usize },
    #[error("board holds {0} cards, expected at most 5")]
    BoardSize(usize),
    #[error("card {0} appears more than once")]
    Duplicate(Card),
}

/// Anything that aborts a simulation run.
///
/// No partial results accompany an error; a run either completes every
/// scheduled trial or reports nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EquityError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("deck exhausted: {missing} more cards needed to complete the board")]
    Exhausted { missing: usize },
}
