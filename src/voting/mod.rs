//! Pairwise elimination voting.
//!
//! Entries are paired off in order. Each pair is voted on; when the vote is
//! closed the entry with more votes goes to the back of the queue, or both
//! entries do on a tie. The last entry standing wins.
//!
//! ## Example
//!
//! ```rust
//! use pairvote::voting::{next, set_entries, vote};
//! use pairvote::types::state::State;
//!
//! let state = set_entries(&State::default(), ["Trainspotting", "28 Days Later"]);
//! let state = next(&state)?;
//! let state = vote(&state, "Trainspotting");
//! let state = next(&state)?;
//!
//! assert_eq!(state.winner(), Some("Trainspotting"));
//! # Ok::<(), pairvote::PairVoteError>(())
//! ```

mod logic;
mod reducer;

pub use logic::{next, set_entries, vote};
pub use reducer::{reduce, reduce_all, start};
