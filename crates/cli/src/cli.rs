//! Command-line arguments

use clap::Parser;
use rewards_networking::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "rewards-claim")]
#[command(about = "List the rewards on a claim page and claim one")]
#[command(version)]
pub struct Args {
    /// Claim page URL, e.g. https://rewards.hypixel.net/claim-reward/47276657
    #[arg(env = "REWARDS_URL")]
    pub url: String,

    /// Scheme and host serving the claim pages
    #[arg(long, env = "REWARDS_BASE_URL", default_value = "https://rewards.hypixel.net")]
    pub base_url: String,

    /// Network timeout for each request, in seconds
    #[arg(long, env = "REWARDS_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Claim reward N (1-based) without prompting
    #[arg(long, value_name = "N", conflicts_with = "list")]
    pub choice: Option<usize>,

    /// Print the catalog and exit without claiming
    #[arg(long)]
    pub list: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Verbose output (debug logs)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..ClientConfig::default()
        }
    }

    /// Confirmation is skipped when the choice came from the command line
    pub fn needs_confirmation(&self) -> bool {
        !self.yes && self.choice.is_none()
    }
}
