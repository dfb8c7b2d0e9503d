//! One run: fetch → list → select → confirm → claim

use crate::cli::Args;
use crate::prompt;
use anyhow::Context;
use rewards_core::Reward;
use rewards_networking::{load_reward_page, RewardsClient};
use std::io::{self, Write};
use tracing::info;

/// How a run ended without error
#[derive(Debug)]
pub enum Outcome {
    /// Catalog printed, nothing claimed (`--list`)
    Listed,
    /// Operator declined at the confirmation prompt
    Declined,
    Claimed(Reward),
}

pub async fn run(args: &Args) -> anyhow::Result<Outcome> {
    let client = RewardsClient::new(args.client_config()).context("configure HTTP client")?;

    let page = load_reward_page(&client, &args.url)
        .await
        .context("load reward page")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    prompt::print_catalog(&mut out, page.catalog())?;
    if args.list {
        return Ok(Outcome::Listed);
    }

    let choice = match args.choice {
        Some(choice) => choice,
        None => prompt::prompt_selection(&mut input, &mut out, page.catalog().len())?,
    };
    let pending = page.select(choice)?;

    if args.needs_confirmation() && !prompt::confirm(&mut input, &mut out, pending.reward())? {
        writeln!(out, "Nothing claimed.")?;
        return Ok(Outcome::Declined);
    }

    info!("Submitting claim for {}", pending.reward());
    let reward = pending.submit(&client).await?;
    Ok(Outcome::Claimed(reward))
}
