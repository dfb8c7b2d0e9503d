//! Claim submission and response validation

use rewards_core::{is_claim_success, ClaimContext, ClaimRequest, Error, Result, Reward};
use std::future::Future;
use tracing::{info, instrument, warn};

/// Sends a claim request and returns the raw response body.
///
/// Implemented by [`crate::RewardsClient`]; tests substitute a stub.
pub trait ClaimTransport {
    fn submit_claim(&self, request: &ClaimRequest) -> impl Future<Output = Result<String>> + Send;
}

/// Claim `reward` with the given credentials
///
/// # Important
/// Issues exactly one claim call and never retries. Success means the body is
/// exactly `reward claimed`; anything else is [`Error::ClaimFailed`] carrying
/// the body. Transport errors are passed through untouched.
#[instrument(skip(transport, reward, context), fields(option = reward.ordinal()))]
pub async fn claim_reward<T: ClaimTransport>(
    transport: &T,
    reward: &Reward,
    context: &ClaimContext,
) -> Result<()> {
    let request = ClaimRequest::new(reward, context);

    info!("Claiming {} (option {})", reward, reward.ordinal());
    let body = transport.submit_claim(&request).await?;

    if is_claim_success(&body) {
        info!("Reward claimed");
        Ok(())
    } else {
        warn!("Claim rejected, server responded: {:?}", body);
        Err(Error::ClaimFailed { body })
    }
}
