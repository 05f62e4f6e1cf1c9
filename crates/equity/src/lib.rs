//! Monte Carlo equity for Texas Hold'em.
//!
//! Given every player's hole cards and a partial board, the [`Simulator`]
//! completes the board at random many times and tallies who holds the
//! strongest hand category. Comparison is category-only: two flushes tie,
//! whatever their ranks.
//!
//! - [`Simulator`] — validation, trials, parallel reduction
//! - [`Tally`] — per-player win/tie counters
//! - [`Report`] — percentages in player order
//! - [`Config`] — trial count, seed, worker count
mod config;
mod error;
mod report;
mod simulator;
mod tally;


pub use config::*;
pub use error::*;
pub use report::*;
pub use simulator::*;
pub use tally::*;
