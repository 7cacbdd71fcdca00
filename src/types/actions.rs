//! Actions dispatched into the voting reducer.

use serde::{Deserialize, Serialize};

/// An intent to change the voting state.
///
/// Wire shape: `{"type": "SET_ENTRIES", "entries": [...]}`, `{"type": "NEXT"}`,
/// `{"type": "VOTE", "entry": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replaces the entries waiting to be paired.
    SetEntries {
        /// New entries, in pairing order.
        entries: Vec<String>,
    },

    /// Closes the current vote (if any) and opens the next one.
    Next,

    /// Casts one vote for an entry of the current pair.
    Vote {
        /// The entry voted for.
        entry: String,
    },
}

impl Action {
    /// Creates a `SET_ENTRIES` action.
    pub fn set_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Action::SetEntries {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a `VOTE` action.
    pub fn vote(entry: impl Into<String>) -> Self {
        Action::Vote {
            entry: entry.into(),
        }
    }

    /// Wire name of the action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetEntries { .. } => "SET_ENTRIES",
            Action::Next => "NEXT",
            Action::Vote { .. } => "VOTE",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::SetEntries { entries } => write!(f, "SET_ENTRIES ({} entries)", entries.len()),
            Action::Next => write!(f, "NEXT"),
            Action::Vote { entry } => write!(f, "VOTE {}", entry),
        }
    }
}
