//! Monte Carlo equity for Texas Hold'em hands.
//!
//! This facade crate re-exports the pokercalc crates for convenient access.
//!
//! - [`core`] — Type aliases, run constants, logging and interrupt helpers
//! - [`cards`] — Card model, combination enumeration, hand classification
//! - [`equity`] — Simulator, tallies, and reports

pub use pkc_core   as core;
pub use pkc_cards  as cards;
pub use pkc_equity as equity;

pub use pkc_core::*;
