//! Action dispatch over the core transitions.

use crate::types::actions::Action;
use crate::types::state::State;
use crate::PairVoteResult;

use super::logic::{next, set_entries, vote};

/// Applies `action` to `state` and returns the new state.
pub fn reduce(state: &State, action: &Action) -> PairVoteResult<State> {
    tracing::trace!(action = action.kind(), "Reducing action");

    match action {
        Action::SetEntries { entries } => Ok(set_entries(state, entries.iter().cloned())),
        Action::Next => next(state),
        Action::Vote { entry } => Ok(vote(state, entry)),
    }
}

/// Applies `actions` in order, stopping at the first error.
pub fn reduce_all<'a, I>(state: &State, actions: I) -> PairVoteResult<State>
where
    I: IntoIterator<Item = &'a Action>,
{
    actions
        .into_iter()
        .try_fold(state.clone(), |current, action| reduce(&current, action))
}

/// Loads `entries` into a fresh state and opens the first vote.
pub fn start<I, S>(entries: I) -> PairVoteResult<State>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let state = set_entries(&State::default(), entries);
    next(&state)
}
