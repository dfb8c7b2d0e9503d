//! Reward page flow: fetched page → parsed catalog → pending claim

use super::claim::{claim_reward, ClaimTransport};
use crate::http::{FetchedPage, RewardsClient};
use rewards_core::{
    extract_app_data, extract_csrf_token, ClaimContext, ClaimIdResolver, Error, Result, Reward,
    RewardCatalog, CSRF_COOKIE_NAME,
};
use tracing::{debug, info, instrument};

/// A reward page whose catalog and CSRF token have been extracted
#[derive(Debug, Clone)]
pub struct RewardPage {
    catalog: RewardCatalog,
    claim_id: String,
    csrf_token: String,
    session_cookie: Option<String>,
}

impl RewardPage {
    /// Extract and parse the embedded state of `page_text`.
    ///
    /// Both tokens are located before the catalog is decoded, so template
    /// drift surfaces as [`Error::Extraction`] rather than a parse error.
    pub fn parse(
        page_text: &str,
        claim_id: impl Into<String>,
        session_cookie: Option<String>,
    ) -> Result<Self> {
        let blob = extract_app_data(page_text)?;
        let csrf_token = extract_csrf_token(page_text)?;
        let catalog = RewardCatalog::parse(blob)?;

        Ok(Self {
            catalog,
            claim_id: claim_id.into(),
            csrf_token: csrf_token.to_string(),
            session_cookie,
        })
    }

    /// Parse a fetched page, taking the claim identifier from its URL
    pub fn from_fetched(page: FetchedPage, resolver: &ClaimIdResolver) -> Result<Self> {
        let claim_id = resolver.resolve(&page.url)?.to_string();
        Self::parse(&page.body, claim_id, page.session_cookie)
    }

    pub fn catalog(&self) -> &RewardCatalog {
        &self.catalog
    }

    pub fn claim_id(&self) -> &str {
        &self.claim_id
    }

    /// Pick the reward at 1-based `choice` and bind the claim credentials to it
    pub fn select(&self, choice: usize) -> Result<PendingClaim> {
        let reward = self.catalog.select(choice)?.clone();
        let session_cookie = self
            .session_cookie
            .clone()
            .ok_or_else(|| Error::MissingSessionCookie(CSRF_COOKIE_NAME.to_string()))?;

        debug!("Selected option {} for claim {}", reward.ordinal(), self.claim_id);

        Ok(PendingClaim {
            reward,
            context: ClaimContext::new(&self.claim_id, &self.csrf_token, session_cookie),
        })
    }
}

/// An operator-confirmed selection that has not been submitted yet
#[derive(Debug)]
pub struct PendingClaim {
    reward: Reward,
    context: ClaimContext,
}

impl PendingClaim {
    pub fn reward(&self) -> &Reward {
        &self.reward
    }

    pub fn context(&self) -> &ClaimContext {
        &self.context
    }

    /// Issue the claim call. Consumes the selection so it is submitted at most once.
    pub async fn submit<T: ClaimTransport>(self, transport: &T) -> Result<Reward> {
        claim_reward(transport, &self.reward, &self.context).await?;
        Ok(self.reward)
    }
}

/// Resolve the claim identifier from `url`, then fetch and parse the page.
///
/// A URL that is not a claim page fails before any request is made. A URL
/// without a scheme is fetched with the base URL's scheme.
#[instrument(skip(client))]
pub async fn load_reward_page(client: &RewardsClient, url: &str) -> Result<RewardPage> {
    let resolver = ClaimIdResolver::new(&client.config().host()?)?;
    let claim_id = resolver.resolve(url)?.to_string();

    let fetched = client.fetch_page(&client.config().absolute_url(url)?).await?;
    let page = RewardPage::parse(&fetched.body, claim_id, fetched.session_cookie)?;

    info!(
        "Loaded {} rewards for claim {}",
        page.catalog().len(),
        page.claim_id()
    );
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::claim::stub::StubTransport;

    const PAGE: &str = r#"<script>
        window.appData = '{"rewards":[{"rarity":"common","reward":"coins","amount":100},{"rarity":"rare","reward":"active_boost","gameType":"bed_wars"}]}';
        window.securityToken = "tok123";
    </script>"#;

    #[test]
    fn test_parse_page() {
        let page = RewardPage::parse(PAGE, "AbCdEfGh", Some("cookie".to_string())).unwrap();

        assert_eq!(page.claim_id(), "AbCdEfGh");
        assert_eq!(
            page.catalog().listing(),
            vec![
                "1. [Common] 100x Coins".to_string(),
                "2. [Rare] 1x Bed wars Active boost".to_string(),
            ]
        );
    }

    #[test]
    fn test_extraction_precedes_parsing() {
        let page = r#"window.appData = 'not json';"#;
        assert!(matches!(
            RewardPage::parse(page, "AbCdEfGh", None),
            Err(Error::Extraction(_))
        ));

        let page = r#"window.appData = 'not json'; window.securityToken = "t";"#;
        assert!(matches!(
            RewardPage::parse(page, "AbCdEfGh", None),
            Err(Error::MalformedCatalog(_))
        ));
    }

    #[test]
    fn test_from_fetched_resolves_claim_id() {
        let resolver = ClaimIdResolver::new("rewards.example.net").unwrap();
        let fetched = FetchedPage {
            url: "https://rewards.example.net/claim-reward/AbCdEfGh/".to_string(),
            body: PAGE.to_string(),
            session_cookie: Some("cookie".to_string()),
        };
        assert_eq!(
            RewardPage::from_fetched(fetched.clone(), &resolver)
                .unwrap()
                .claim_id(),
            "AbCdEfGh"
        );

        let fetched = FetchedPage {
            url: "https://rewards.example.net/other/AbCdEfGh".to_string(),
            ..fetched
        };
        assert!(matches!(
            RewardPage::from_fetched(fetched, &resolver),
            Err(Error::ClaimIdentifier(_))
        ));
    }

    #[test]
    fn test_select_requires_cookie_and_valid_choice() {
        let page = RewardPage::parse(PAGE, "AbCdEfGh", None).unwrap();
        assert!(matches!(page.select(1), Err(Error::MissingSessionCookie(_))));

        let page = RewardPage::parse(PAGE, "AbCdEfGh", Some("cookie".to_string())).unwrap();
        assert!(matches!(page.select(3), Err(Error::InvalidSelection { .. })));

        let pending = page.select(2).unwrap();
        assert_eq!(pending.reward().ordinal(), 1);
        assert_eq!(pending.context().csrf_token(), "tok123");
        assert_eq!(pending.context().session_cookie(), "cookie");
    }

    #[tokio::test]
    async fn test_submit_sends_one_claim() {
        let page = RewardPage::parse(PAGE, "AbCdEfGh", Some("cookie".to_string())).unwrap();
        let transport = StubTransport::replying("reward claimed");

        let claimed = page.select(1).unwrap().submit(&transport).await.unwrap();

        assert_eq!(claimed.reward_type(), "Coins");
        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].option, 0);
        assert_eq!(requests[0].cookie_header(), "_csrf=cookie");
    }
}
