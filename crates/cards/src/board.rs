use super::card::Card;
use super::hand::Hand;
use pkc_core::BOARD_SIZE;

/// The community cards visible to all players.
///
/// Holds anywhere from zero to five cards. A partial board is completed
/// by dealing [`Board::missing`] more cards from the deck.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Board(Hand);

impl Board {
    /// Adds cards to the board, keeping deal order.
    pub fn add(&mut self, hand: Hand) {
        debug_assert!(self.0.size() + hand.size() <= BOARD_SIZE);
        self.0 = Hand::add(std::mem::take(&mut self.0), hand);
    }
    /// Number of cards still to come.
    pub fn missing(&self) -> usize {
        BOARD_SIZE.saturating_sub(self.0.size())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    pub fn cards(&self) -> &[Card] {
        self.0.cards()
    }
}

/// Board -> Hand is infallible
/// Hand -> Board accepts at most five cards
impl TryFrom<Hand> for Board {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            n if n <= BOARD_SIZE => Ok(Self(hand)),
            n => Err(format!("board holds at most five cards, got {}", n)),
        }
    }
}
impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|c| format!("{}", c))
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}
