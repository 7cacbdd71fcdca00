//! Interactive contest.
//!
//! This module drives a contest from the terminal using dialoguer.

use dialoguer::{theme::ColorfulTheme, Confirm, Select};

use crate::types::actions::Action;
use crate::types::state::{State, Vote};
use crate::voting;
use crate::PairVoteResult;

/// What the user picked from the round menu.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Choice {
    VoteFor(String),
    CloseVote,
    Quit,
}

/// Runs a contest over `entries` until a winner is decided or the user quits.
pub fn run_interactive_contest(entries: Vec<String>) -> PairVoteResult<()> {
    let theme = ColorfulTheme::default();

    println!("\nContest with {} entries\n", entries.len());

    let mut state = voting::start(entries)?;

    while let Some(vote) = state.current_vote() {
        let choices = round_choices(vote);
        let labels: Vec<String> = choices.iter().map(|c| choice_label(vote, c)).collect();

        let selection = Select::with_theme(&theme)
            .with_prompt(format!("{} vs {}", vote.pair[0], vote.pair[1]))
            .items(&labels)
            .default(0)
            .interact()?;

        let choice = &choices[selection];

        if *choice == Choice::Quit {
            if Confirm::with_theme(&theme)
                .with_prompt("Stop the contest without a winner?")
                .default(false)
                .interact()?
            {
                println!("\nContest stopped.\n");
                return Ok(());
            }
            continue;
        }

        if *choice == Choice::CloseVote {
            println!("  {} ({} votes cast)", vote.outcome(), vote.tally.total());
        }

        state = apply_choice(&state, choice)?;
    }

    if let Some(winner) = state.winner() {
        println!("\n🏆 Winner: {}\n", winner);
        tracing::info!(winner, "Contest decided");
    }

    Ok(())
}

fn round_choices(vote: &Vote) -> Vec<Choice> {
    let mut choices: Vec<Choice> = vote.pair.iter().cloned().map(Choice::VoteFor).collect();
    choices.push(Choice::CloseVote);
    choices.push(Choice::Quit);
    choices
}

fn choice_label(vote: &Vote, choice: &Choice) -> String {
    match choice {
        Choice::VoteFor(entry) => format!("{} ({} votes)", entry, vote.tally.count(entry)),
        Choice::CloseVote => "Close vote".to_string(),
        Choice::Quit => "Quit".to_string(),
    }
}

fn apply_choice(state: &State, choice: &Choice) -> PairVoteResult<State> {
    let action = match choice {
        Choice::VoteFor(entry) => Action::vote(entry.clone()),
        Choice::CloseVote => Action::Next,
        Choice::Quit => return Ok(state.clone()),
    };
    voting::reduce(state, &action)
}
