use std::sync::Arc;

use coinbase_api_client::auth::EnvCredentials;
use coinbase_api_client::rest::CoinbaseRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("COINBASE_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = CoinbaseRestClient::new();
    let rates = client.get_exchange_rates().await?;
    assert!(rates.contains_key("btc_to_usd"));

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match EnvCredentials::try_from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = CoinbaseRestClient::builder()
        .credentials(Arc::new(credentials))
        .build();

    let balance = client.get_balance().await?;
    assert!(balance.is_record() || balance.is_raw());

    Ok(())
}
