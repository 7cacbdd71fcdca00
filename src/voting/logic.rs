//! Core state transitions.
//!
//! Every function takes the current state by reference and returns a new
//! state; nothing is mutated in place.

use crate::types::state::{State, Vote};
use crate::{PairVoteError, PairVoteResult};

/// Replaces the entries waiting to be paired.
///
/// Any vote in progress is kept. Setting entries on a decided state starts a
/// new contest. No validation is done on the entries themselves.
pub fn set_entries<I, S>(state: &State, entries: I) -> State
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let entries: Vec<String> = entries.into_iter().map(Into::into).collect();

    tracing::debug!(count = entries.len(), "Setting entries");

    match state {
        State::Voting { vote, .. } => State::Voting {
            vote: vote.clone(),
            entries,
        },
        State::Idle { .. } | State::Decided { .. } => State::Idle { entries },
    }
}

/// Advances the contest by one step.
///
/// Closes the open vote (the winner, or both entries on a tie, go to the
/// back of the entries) and pairs the first two entries. When a single entry
/// is left it becomes the winner.
///
/// # Errors
///
/// - [`PairVoteError::NotEnoughEntries`] when no vote is open and fewer than
///   two entries are waiting.
/// - [`PairVoteError::AlreadyDecided`] when the contest is over.
pub fn next(state: &State) -> PairVoteResult<State> {
    match state {
        State::Idle { entries } => pair_off(entries.clone()),
        State::Voting { vote, entries } => {
            let advancing = vote.advancing();
            tracing::debug!(pair = ?vote.pair, advancing = ?advancing, "Closing vote");

            let mut pool = entries.clone();
            pool.extend(advancing);

            if pool.len() == 1 {
                let winner = pool.remove(0);
                tracing::debug!(winner = %winner, "Contest decided");
                Ok(State::Decided { winner })
            } else {
                pair_off(pool)
            }
        }
        State::Decided { winner } => Err(PairVoteError::AlreadyDecided {
            winner: winner.clone(),
        }),
    }
}

/// Casts one vote for `entry` in the open vote.
///
/// Votes for entries outside the current pair, or on a state without an
/// open vote, return the state unchanged.
pub fn vote(state: &State, entry: &str) -> State {
    match state {
        State::Voting { vote, entries } => State::Voting {
            vote: vote.cast(entry),
            entries: entries.clone(),
        },
        _ => {
            tracing::debug!(entry, "Ignoring vote: no vote in progress");
            state.clone()
        }
    }
}

fn pair_off(entries: Vec<String>) -> PairVoteResult<State> {
    let mut rest = entries.into_iter();

    match (rest.next(), rest.next()) {
        (Some(first), Some(second)) => {
            let entries: Vec<String> = rest.collect();
            tracing::debug!(
                first = %first,
                second = %second,
                remaining = entries.len(),
                "Opening vote"
            );
            Ok(State::Voting {
                vote: Vote::new(first, second),
                entries,
            })
        }
        (first, _) => Err(PairVoteError::NotEnoughEntries {
            count: usize::from(first.is_some()),
        }),
    }
}
