//! Card representation and category-level hand evaluation.
//!
//! ## Core Types
//!
//! - [`Card`] — A single card as a `(Rank, Suit)` pair encoded in one byte
//! - [`Hand`] — An ordered sequence of cards, evaluated as a set
//! - [`Hole`] — A player's two private cards
//! - [`Board`] — The community cards, zero to five
//! - [`Deck`] — The unseen cards, shuffled and dealt from the front
//!
//! ## Evaluation
//!
//! - [`Combinations`] — Positional k-subset enumeration
//! - [`Evaluator`] — Five-card classifier
//! - [`Ranking`] — Hand category (high card through straight flush)
//! - [`Strength`] — Best category over every five-card subset
//!
//! Randomness is injected through [`Shuffler`]; [`Seeded`] is the
//! reproducible production implementation.
mod board;
mod card;
mod combinations;
mod deck;
mod evaluator;
mod hand;
mod hole;
mod rank;
mod ranking;
mod shuffle;
mod strength;
mod suit;

pub use board::*;
pub use card::*;
pub use combinations::*;
pub use deck::*;
pub use evaluator::*;
pub use hand::*;
pub use hole::*;
pub use rank::*;
pub use ranking::*;
pub use shuffle::*;
pub use strength::*;
pub use suit::*;
