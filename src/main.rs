use clap::Parser;
use pairvote::cli::{Cli, Commands};
use pairvote::types::config::Config;
use pairvote::PairVoteResult;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> PairVoteResult<()> {
    let cli = Cli::parse();

    // Load configuration first (no logging yet)
    let (config, load_error) = Config::load_or_default(&cli.config);

    // CLI flags take precedence over config
    let log_level = if cli.quiet {
        "error".to_string()
    } else if cli.verbose {
        "debug".to_string()
    } else {
        config.general.log_level.clone()
    };

    let filter = EnvFilter::from_default_env().add_directive(
        format!("pairvote={}", log_level)
            .parse()
            .unwrap_or_else(|_| "pairvote=info".parse().expect("fallback directive is valid")),
    );

    if config.general.log_format == "json" {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(filter)
            .init();
    }

    match load_error {
        Some(e) => tracing::warn!(
            path = %cli.config.display(),
            error = %e,
            "Ignoring configuration, using defaults"
        ),
        None => tracing::debug!("Configuration loaded from: {}", cli.config.display()),
    }

    match cli.command {
        Commands::Init { path } => {
            pairvote::cli::commands::init(path)?;
        }
        Commands::Run { entries, actions } => {
            pairvote::cli::commands::run(entries.as_deref(), actions.as_deref(), &config)?;
        }
        Commands::Apply { state, action } => {
            pairvote::cli::commands::apply(&state, &action)?;
        }
        Commands::Play { entries } => {
            pairvote::cli::commands::play(entries.as_deref(), &config)?;
        }
        Commands::Version => {
            pairvote::cli::commands::version();
        }
    }

    Ok(())
}
