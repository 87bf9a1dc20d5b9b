//! Engine-vs-engine arena
//!
//! This crate provides infrastructure for:
//! - Playing series of games between the workspace engines
//! - Tallying win/loss/draw outcomes per series
//! - Writing JSON reports for later comparison
//!
//! # Usage
//!
//! ```bash
//! # Play negamax against the random baseline
//! cargo run -p arena -- negamax random --games 20 --depth 2
//!
//! # Load the series settings from a config file instead
//! cargo run -p arena -- negamax random --config arena.toml
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
