//! Voting state types.
//!
//! The state of an elimination contest is one of three stages, modelled as
//! [`State`]. At the process boundary the state is exchanged as a tree with
//! the optional top-level fields `entries`, `vote` and `winner`:
//!
//! ```json
//! {"vote": {"pair": ["Sunshine", "Millions"], "tally": {"Sunshine": 2}}, "entries": ["127 Hours"]}
//! ```
//!
//! Deserialization rejects trees that break the stage invariants, so every
//! `State` value in memory is a legal one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::PairVoteError;

// ═══════════════════════════════════════════════════════════════════════════
// Tally
// ═══════════════════════════════════════════════════════════════════════════

/// Vote counts for the entries of the current pair.
///
/// An empty tally is the same as no tally at all; a missing entry counts as 0.
/// Counts saturate at `u32::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<String, u32>);

impl Tally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of votes cast for `entry`.
    pub fn count(&self, entry: &str) -> u32 {
        self.0.get(entry).copied().unwrap_or(0)
    }

    /// Total number of votes cast in this round.
    pub fn total(&self) -> u32 {
        self.0.values().fold(0u32, |acc, count| acc.saturating_add(*count))
    }

    /// Whether no vote has been cast yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(entry, count)` in entry order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(entry, count)| (entry.as_str(), *count))
    }

    fn incremented(&self, entry: &str) -> Self {
        let mut next = self.clone();
        let count = next.0.entry(entry.to_string()).or_insert(0);
        *count = count.saturating_add(1);
        next
    }

    fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Tally {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(e, c)| (e.into(), c)).collect())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Vote
// ═══════════════════════════════════════════════════════════════════════════

/// Result of closing a vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// One entry has strictly more votes than the other.
    Winner(String),
    /// Both entries have the same count.
    Tie,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(entry) => write!(f, "{} wins", entry),
            Outcome::Tie => write!(f, "tie"),
        }
    }
}

/// A head-to-head vote between two entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VoteTree")]
pub struct Vote {
    /// The two entries under vote, in pairing order.
    pub pair: [String; 2],

    /// Votes cast so far. Keys are always members of `pair`.
    #[serde(default, skip_serializing_if = "Tally::is_empty")]
    pub tally: Tally,
}

impl Vote {
    /// Opens a vote between two entries with an empty tally.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            pair: [first.into(), second.into()],
            tally: Tally::new(),
        }
    }

    /// Sets the tally, dropping counts for entries outside the pair.
    pub fn with_tally(mut self, tally: Tally) -> Self {
        let kept: Tally = tally
            .iter()
            .filter(|(entry, _)| self.contains(entry))
            .collect();
        self.tally = kept;
        self
    }

    /// Whether `entry` is one of the two paired entries.
    pub fn contains(&self, entry: &str) -> bool {
        self.pair.iter().any(|e| e == entry)
    }

    /// Returns this vote with one more vote for `entry`.
    ///
    /// A vote for an entry outside the pair is ignored and the vote is
    /// returned unchanged.
    pub fn cast(&self, entry: &str) -> Vote {
        if !self.contains(entry) {
            tracing::debug!(entry, pair = ?self.pair, "Ignoring vote for entry outside the pair");
            return self.clone();
        }

        Vote {
            pair: self.pair.clone(),
            tally: self.tally.incremented(entry),
        }
    }

    /// Decides the vote from the current tally.
    pub fn outcome(&self) -> Outcome {
        let [first, second] = &self.pair;
        let (a, b) = (self.tally.count(first), self.tally.count(second));

        if a > b {
            Outcome::Winner(first.clone())
        } else if b > a {
            Outcome::Winner(second.clone())
        } else {
            Outcome::Tie
        }
    }

    /// Entries that go back into the pool when this vote closes.
    ///
    /// The winner alone, or both entries in pair order on a tie.
    pub fn advancing(&self) -> Vec<String> {
        match self.outcome() {
            Outcome::Winner(entry) => vec![entry],
            Outcome::Tie => self.pair.to_vec(),
        }
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VoteTree {
    pair: [String; 2],
    #[serde(default)]
    tally: Tally,
}

impl TryFrom<VoteTree> for Vote {
    type Error = PairVoteError;

    fn try_from(tree: VoteTree) -> Result<Self, Self::Error> {
        let vote = Vote {
            pair: tree.pair,
            tally: Tally::new(),
        };

        if let Some(stray) = tree.tally.keys().find(|entry| !vote.contains(entry)) {
            return Err(PairVoteError::invalid_state(format!(
                "tally entry '{}' is not part of the pair",
                stray
            )));
        }

        Ok(Vote {
            tally: tree.tally,
            ..vote
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// State
// ═══════════════════════════════════════════════════════════════════════════

/// Stage of an elimination contest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StateTree", into = "StateTree")]
pub enum State {
    /// Entries waiting to be paired, no vote open.
    Idle {
        /// Entries in pairing order.
        entries: Vec<String>,
    },

    /// A vote is open.
    Voting {
        /// The vote in progress.
        vote: Vote,
        /// Entries waiting for the following rounds.
        entries: Vec<String>,
    },

    /// A single entry survived every round.
    Decided {
        /// The overall winner.
        winner: String,
    },
}

impl Default for State {
    fn default() -> Self {
        State::Idle {
            entries: Vec::new(),
        }
    }
}

impl State {
    /// Creates an idle state holding `entries`.
    pub fn idle<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        State::Idle {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a state with `vote` open and `entries` waiting.
    pub fn voting<I, S>(vote: Vote, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        State::Voting {
            vote,
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a terminal state.
    pub fn decided(winner: impl Into<String>) -> Self {
        State::Decided {
            winner: winner.into(),
        }
    }

    /// Entries waiting to be paired. Empty once decided.
    pub fn entries(&self) -> &[String] {
        match self {
            State::Idle { entries } | State::Voting { entries, .. } => entries,
            State::Decided { .. } => &[],
        }
    }

    /// The vote in progress, if any.
    pub fn current_vote(&self) -> Option<&Vote> {
        match self {
            State::Voting { vote, .. } => Some(vote),
            _ => None,
        }
    }

    /// The overall winner, once decided.
    pub fn winner(&self) -> Option<&str> {
        match self {
            State::Decided { winner } => Some(winner),
            _ => None,
        }
    }

    /// Whether the contest has finished.
    pub fn is_decided(&self) -> bool {
        matches!(self, State::Decided { .. })
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Idle { entries } => write!(f, "idle ({} entries waiting)", entries.len()),
            State::Voting { vote, entries } => write!(
                f,
                "voting: {} vs {} ({} entries waiting)",
                vote.pair[0],
                vote.pair[1],
                entries.len()
            ),
            State::Decided { winner } => write!(f, "decided: {}", winner),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct StateTree {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    vote: Option<Vote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    entries: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    winner: Option<String>,
}

impl TryFrom<StateTree> for State {
    type Error = PairVoteError;

    fn try_from(tree: StateTree) -> Result<Self, Self::Error> {
        match (tree.winner, tree.vote, tree.entries) {
            (Some(_), Some(_), _) => Err(PairVoteError::invalid_state(
                "winner and vote cannot both be present",
            )),
            (Some(_), None, Some(_)) => Err(PairVoteError::invalid_state(
                "a decided state carries no entries",
            )),
            (Some(winner), None, None) => Ok(State::Decided { winner }),
            (None, Some(vote), entries) => Ok(State::Voting {
                vote,
                entries: entries.unwrap_or_default(),
            }),
            (None, None, entries) => Ok(State::Idle {
                entries: entries.unwrap_or_default(),
            }),
        }
    }
}

impl From<State> for StateTree {
    fn from(state: State) -> Self {
        match state {
            State::Idle { entries } => StateTree {
                vote: None,
                entries: Some(entries),
                winner: None,
            },
            State::Voting { vote, entries } => StateTree {
                vote: Some(vote),
                entries: Some(entries),
                winner: None,
            },
            State::Decided { winner } => StateTree {
                vote: None,
                entries: None,
                winner: Some(winner),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tally(counts: &[(&str, u32)]) -> Tally {
        counts.iter().map(|(e, c)| (*e, *c)).collect()
    }

    #[test]
    fn test_tally_count_defaults_to_zero() {
        let t = tally(&[("Trainspotting", 3)]);

        assert_eq!(t.count("Trainspotting"), 3);
        assert_eq!(t.count("28 Days Later"), 0);
        assert_eq!(t.total(), 3);
    }

    #[test]
    fn test_count_saturates_at_max() {
        let vote = Vote::new("A", "B").with_tally(tally(&[("A", u32::MAX), ("B", 1)]));

        let next_vote = vote.cast("A");
        assert_eq!(next_vote.tally.count("A"), u32::MAX);
        assert_eq!(next_vote.outcome(), Outcome::Winner("A".to_string()));
        assert_eq!(next_vote.tally.total(), u32::MAX);
    }

    #[test]
    fn test_outcome_winner_first() {
        let vote = Vote::new("Trainspotting", "28 Days Later")
            .with_tally(tally(&[("Trainspotting", 4), ("28 Days Later", 2)]));

        assert_eq!(vote.outcome(), Outcome::Winner("Trainspotting".to_string()));
        assert_eq!(vote.advancing(), vec!["Trainspotting"]);
    }

    #[test]
    fn test_outcome_winner_second_with_missing_count() {
        let vote =
            Vote::new("Trainspotting", "28 Days Later").with_tally(tally(&[("28 Days Later", 1)]));

        assert_eq!(vote.outcome(), Outcome::Winner("28 Days Later".to_string()));
    }

    #[test]
    fn test_outcome_tie_without_tally() {
        let vote = Vote::new("Trainspotting", "28 Days Later");

        assert_eq!(vote.outcome(), Outcome::Tie);
        assert_eq!(vote.advancing(), vec!["Trainspotting", "28 Days Later"]);
    }

    #[test]
    fn test_with_tally_drops_stray_entries() {
        let vote = Vote::new("Trainspotting", "28 Days Later")
            .with_tally(tally(&[("Trainspotting", 1), ("Sunshine", 5)]));

        assert_eq!(vote.tally, tally(&[("Trainspotting", 1)]));
    }

    #[test]
    fn test_serialize_voting_tree() {
        let state = State::voting(
            Vote::new("Sunshine", "Millions").with_tally(tally(&[("Sunshine", 2)])),
            ["127 Hours"],
        );

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            json!({
                "vote": {"pair": ["Sunshine", "Millions"], "tally": {"Sunshine": 2}},
                "entries": ["127 Hours"]
            })
        );
    }

    #[test]
    fn test_serialize_omits_empty_tally() {
        let state = State::voting(Vote::new("Sunshine", "Millions"), Vec::<String>::new());

        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(
            value,
            json!({"vote": {"pair": ["Sunshine", "Millions"]}, "entries": []})
        );
    }

    #[test]
    fn test_serialize_decided_tree() {
        let value = serde_json::to_value(State::decided("Trainspotting")).unwrap();
        assert_eq!(value, json!({"winner": "Trainspotting"}));
    }

    #[test]
    fn test_deserialize_empty_tree_is_initial_state() {
        let state: State = serde_json::from_str("{}").unwrap();
        assert_eq!(state, State::default());
    }

    #[test]
    fn test_deserialize_voting_tree() {
        let state: State = serde_json::from_value(json!({
            "vote": {
                "pair": ["Trainspotting", "28 Days Later"],
                "tally": {"Trainspotting": 4, "28 Days Later": 2}
            },
            "entries": ["Sunshine"]
        }))
        .unwrap();

        let expected = State::voting(
            Vote::new("Trainspotting", "28 Days Later")
                .with_tally(tally(&[("Trainspotting", 4), ("28 Days Later", 2)])),
            ["Sunshine"],
        );
        assert_eq!(state, expected);
    }

    #[test]
    fn test_deserialize_rejects_winner_with_vote() {
        let result: Result<State, _> = serde_json::from_value(json!({
            "winner": "Trainspotting",
            "vote": {"pair": ["Trainspotting", "28 Days Later"]}
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_winner_with_entries() {
        let result: Result<State, _> = serde_json::from_value(json!({
            "winner": "Trainspotting",
            "entries": []
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_stray_tally_key() {
        let result: Result<State, _> = serde_json::from_value(json!({
            "vote": {
                "pair": ["Trainspotting", "28 Days Later"],
                "tally": {"Sunshine": 1}
            }
        }));

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Sunshine"));
    }

    #[test]
    fn test_deserialize_rejects_pair_of_three() {
        let result: Result<State, _> = serde_json::from_value(json!({
            "vote": {"pair": ["Trainspotting", "28 Days Later", "Sunshine"]}
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_accessors() {
        let voting = State::voting(Vote::new("A", "B"), ["C"]);
        assert_eq!(voting.entries(), ["C".to_string()]);
        assert!(voting.current_vote().is_some());
        assert_eq!(voting.winner(), None);

        let decided = State::decided("A");
        assert!(decided.entries().is_empty());
        assert!(decided.current_vote().is_none());
        assert_eq!(decided.winner(), Some("A"));
        assert!(decided.is_decided());
    }

    #[test]
    fn test_display() {
        assert_eq!(State::idle(["A", "B"]).to_string(), "idle (2 entries waiting)");
        assert_eq!(
            State::voting(Vote::new("A", "B"), ["C"]).to_string(),
            "voting: A vs B (1 entries waiting)"
        );
        assert_eq!(State::decided("A").to_string(), "decided: A");
    }
}
