//! Implementation of the pairvote CLI commands.

use std::path::{Path, PathBuf};

use crate::types::actions::Action;
use crate::types::config::{load_entries, Config};
use crate::types::state::State;
use crate::voting;
use crate::PairVoteResult;

/// Initializes configuration in the specified directory.
pub fn init(path: Option<PathBuf>) -> PairVoteResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("pairvote.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    Config::default_config().save(&config_path)?;

    println!("pairvote initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. List your entries under [voting] or point entries_file at a JSON array");
    println!("  2. Start a contest: pairvote play");

    Ok(())
}

/// Starts a contest, replays `actions` and prints the resulting state.
pub fn run(entries: Option<&Path>, actions: Option<&Path>, config: &Config) -> PairVoteResult<()> {
    let entries = resolve_entries(entries, config)?;
    let state = voting::start(entries)?;

    let actions = match actions {
        Some(path) => read_actions(path)?,
        None => Vec::new(),
    };

    tracing::info!(actions = actions.len(), "Replaying actions");

    let state = voting::reduce_all(&state, &actions)?;
    tracing::info!(decided = state.is_decided(), "Replay finished");
    print_state(&state)
}

/// Applies one action to the state stored at `state_path`.
pub fn apply(state_path: &Path, action: &str) -> PairVoteResult<()> {
    let content = std::fs::read_to_string(state_path)?;
    let state: State = serde_json::from_str(&content)?;
    let action: Action = serde_json::from_str(action)?;

    tracing::debug!(%state, %action, "Applying action");

    let next_state = voting::reduce(&state, &action)?;
    print_state(&next_state)
}

/// Runs a contest interactively.
pub fn play(entries: Option<&Path>, config: &Config) -> PairVoteResult<()> {
    let entries = resolve_entries(entries, config)?;
    super::interactive::run_interactive_contest(entries)
}

/// Shows version.
pub fn version() {
    println!("pairvote {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Pairwise elimination voting");
}

fn resolve_entries(entries: Option<&Path>, config: &Config) -> PairVoteResult<Vec<String>> {
    match entries {
        Some(path) => load_entries(path),
        None => config.voting.resolve_entries(),
    }
}

fn read_actions(path: &Path) -> PairVoteResult<Vec<Action>> {
    let content = std::fs::read_to_string(path)?;
    let actions: Vec<Action> = serde_json::from_str(&content)?;
    Ok(actions)
}

fn print_state(state: &State) -> PairVoteResult<()> {
    println!("{}", serde_json::to_string_pretty(state)?);
    Ok(())
}
