//! Operator interaction: catalog listing, selection and confirmation

use anyhow::{bail, Context};
use rewards_core::{Error, Result, Reward, RewardCatalog};
use std::io::{BufRead, Write};
use tracing::warn;

/// Invalid answers tolerated before the selection prompt gives up
const MAX_ATTEMPTS: usize = 3;

pub fn print_catalog<W: Write>(out: &mut W, catalog: &RewardCatalog) -> std::io::Result<()> {
    for line in catalog.listing() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// Parse a 1-based choice within `1..=available`
pub fn parse_selection(input: &str, available: usize) -> Result<usize> {
    let trimmed = input.trim();
    match trimmed.parse::<usize>() {
        Ok(choice) if (1..=available).contains(&choice) => Ok(choice),
        _ => Err(Error::InvalidSelection {
            selection: trimmed.to_string(),
            available,
        }),
    }
}

/// Ask for a reward number until a valid one is entered
pub fn prompt_selection<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    available: usize,
) -> anyhow::Result<usize> {
    for _ in 0..MAX_ATTEMPTS {
        let line = ask(input, out, "Reward > ")?;
        match parse_selection(&line, available) {
            Ok(choice) => return Ok(choice),
            Err(err) => {
                warn!("{}", err);
                writeln!(out, "{}", err)?;
            }
        }
    }
    bail!("no valid selection after {} attempts", MAX_ATTEMPTS)
}

/// `y`/`yes` confirms; anything else declines
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    reward: &Reward,
) -> anyhow::Result<bool> {
    let answer = ask(input, out, &format!("Claim {}? [y/N] ", reward))?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> anyhow::Result<String> {
    write!(out, "{}", prompt)?;
    out.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("read operator input")?;
    if read == 0 {
        bail!("input closed before an answer was given");
    }
    Ok(line)
}
