//! # pairvote
//!
//! Pairwise elimination voting as a pure state reducer.
//!
//! Entries are paired off, votes are tallied, winners advance, ties carry
//! both entries forward, and the process ends with a single winner.
//!
//! ## Modules
//!
//! - [`voting`] - State transitions (`set_entries`, `next`, `vote`) and the action reducer
//! - [`types`] - Voting state, actions, configuration and errors
//! - `cli` - Command line interface (feature `cli`)

#[cfg(feature = "cli")]
pub mod cli;
pub mod types;
pub mod voting;

pub use types::actions::Action;
pub use types::config::Config;
pub use types::errors::{PairVoteError, PairVoteResult};
pub use types::state::{Outcome, State, Tally, Vote};
