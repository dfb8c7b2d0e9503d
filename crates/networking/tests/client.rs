//! RewardsClient against a local HTTP server serving canned responses

use rewards_core::{ClaimContext, Error, RewardCatalog};
use rewards_networking::{claim_reward, load_reward_page, ClientConfig, RewardsClient};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const PAGE: &str = r#"<html><head><script>
window.appData = '{"rewards":[{"rarity":"common","reward":"coins","amount":100}]}';
window.securityToken = "tok123";
</script></head><body></body></html>"#;

/// Answer one connection per canned response, in order, and hand back the raw requests
async fn serve(responses: Vec<String>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for response in responses {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            requests.push(String::from_utf8_lossy(&buf).into_owned());
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        }
        requests
    });

    (base_url, handle)
}

fn http_response(status: &str, headers: &[&str], body: &str) -> String {
    let mut response = format!("HTTP/1.1 {}\r\n", status);
    for header in headers {
        response.push_str(header);
        response.push_str("\r\n");
    }
    response.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    ));
    response
}

fn client_for(base_url: &str) -> RewardsClient {
    RewardsClient::new(ClientConfig::with_base_url(base_url)).unwrap()
}

#[tokio::test]
async fn test_load_page_and_claim() {
    let (base_url, server) = serve(vec![
        http_response(
            "200 OK",
            &["Content-Type: text/html", "Set-Cookie: _csrf=sess-42; Path=/; HttpOnly"],
            PAGE,
        ),
        http_response("200 OK", &["Content-Type: text/plain"], "reward claimed"),
    ])
    .await;
    let client = client_for(&base_url);

    let page = load_reward_page(&client, &format!("{}/claim-reward/AbCdEfGh", base_url))
        .await
        .unwrap();
    assert_eq!(page.claim_id(), "AbCdEfGh");
    assert_eq!(page.catalog().listing(), vec!["1. [Common] 100x Coins".to_string()]);

    let claimed = page.select(1).unwrap().submit(&client).await.unwrap();
    assert_eq!(claimed.reward_type(), "Coins");

    let requests = server.await.unwrap();
    assert!(
        requests[0].starts_with("GET /claim-reward/AbCdEfGh HTTP/1.1"),
        "{}",
        requests[0]
    );

    let claim = &requests[1];
    assert!(
        claim.starts_with(
            "POST /claim-reward/claim?option=0&id=AbCdEfGh&activeAd=1&_csrf=tok123&watchedFallback=false HTTP/1.1"
        ),
        "{}",
        claim
    );
    assert!(claim.to_lowercase().contains("cookie: _csrf=sess-42"), "{}", claim);
}

#[tokio::test]
async fn test_load_page_without_scheme() {
    let (base_url, server) = serve(vec![http_response(
        "200 OK",
        &["Content-Type: text/html", "Set-Cookie: _csrf=sess-42; Path=/"],
        PAGE,
    )])
    .await;
    let client = client_for(&base_url);
    let bare = format!(
        "{}/claim-reward/AbCdEfGh",
        base_url.trim_start_matches("http://")
    );

    let page = load_reward_page(&client, &bare).await.unwrap();
    assert_eq!(page.claim_id(), "AbCdEfGh");
    assert_eq!(page.catalog().len(), 1);

    let requests = server.await.unwrap();
    assert!(
        requests[0].starts_with("GET /claim-reward/AbCdEfGh HTTP/1.1"),
        "{}",
        requests[0]
    );
}

#[tokio::test]
async fn test_rejected_claim_keeps_body() {
    let (base_url, server) = serve(vec![http_response(
        "200 OK",
        &["Content-Type: text/plain"],
        "reward already claimed",
    )])
    .await;
    let client = client_for(&base_url);

    let catalog = RewardCatalog::parse(r#"{"rewards":[{"rarity":"rare","reward":"dust"}]}"#).unwrap();
    let context = ClaimContext::new("AbCdEfGh", "tok123", "sess-42");

    let err = claim_reward(&client, catalog.get(0).unwrap(), &context)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ClaimFailed { ref body } if body == "reward already claimed"));

    assert_eq!(server.await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_page_without_cookie_cannot_be_claimed() {
    let (base_url, server) = serve(vec![http_response(
        "200 OK",
        &["Content-Type: text/html"],
        PAGE,
    )])
    .await;
    let client = client_for(&base_url);

    let page = load_reward_page(&client, &format!("{}/claim-reward/AbCdEfGh/", base_url))
        .await
        .unwrap();
    assert!(matches!(page.select(1), Err(Error::MissingSessionCookie(_))));

    server.await.unwrap();
}

#[tokio::test]
async fn test_server_error_is_transport_error() {
    let (base_url, server) = serve(vec![http_response(
        "500 Internal Server Error",
        &["Content-Type: text/plain"],
        "boom",
    )])
    .await;
    let client = client_for(&base_url);

    let err = load_reward_page(&client, &format!("{}/claim-reward/AbCdEfGh", base_url))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{:?}", err);

    server.await.unwrap();
}

#[tokio::test]
async fn test_wrong_url_fails_before_fetch() {
    let client = RewardsClient::new(ClientConfig::default()).unwrap();

    let err = load_reward_page(&client, "https://rewards.hypixel.net/profile/AbCdEfGh")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ClaimIdentifier(_)));
}
