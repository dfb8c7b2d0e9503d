//! Reward claimer - command-line entry point

mod cli;
mod prompt;
mod run;

use clap::Parser;
use cli::Args;
use rewards_core::Error;
use run::Outcome;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code for a claim the server answered but refused
const EXIT_CLAIM_FAILED: u8 = 2;

fn init_logging(verbose: u8) {
    let fallback = if verbose > 0 {
        "rewards_cli=debug,rewards_networking=debug,rewards_core=debug"
    } else {
        "rewards_cli=info,rewards_networking=info,rewards_core=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run::run(&args).await {
        Ok(Outcome::Claimed(reward)) => {
            tracing::info!("Claimed {}", reward);
            println!("Successfully claimed!");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Listed) | Ok(Outcome::Declined) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<Error>() {
            Some(Error::ClaimFailed { body }) => {
                eprintln!("Failed to claim reward, server responded: {}", body);
                ExitCode::from(EXIT_CLAIM_FAILED)
            }
            _ => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        },
    }
}
