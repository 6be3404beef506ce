use std::sync::Arc;

use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use coinbase_api_client::CoinbaseError;
use coinbase_api_client::auth::{
    Credentials, NonceProvider, StaticCredentials, sign_request,
};
use coinbase_api_client::rest::CoinbaseRestClient;
use coinbase_api_client::rest::private::{BuyRequest, RequestMoneyRequest, SendMoneyRequest};

const API_KEY: &str = "abc";
const SECRET_KEY: &str = "s3cr3t";
const NONCE: u64 = 1393800000;

/// Hands out one fixed nonce, standing in for a frozen clock.
struct FrozenNonce(u64);

impl NonceProvider for FrozenNonce {
    fn next_nonce(&self) -> u64 {
        self.0
    }
}

fn build_client(server: &MockServer) -> CoinbaseRestClient {
    CoinbaseRestClient::builder()
        .base_url(server.uri())
        .credentials(Arc::new(StaticCredentials::new(API_KEY, SECRET_KEY)))
        .nonce_provider(Arc::new(FrozenNonce(NONCE)))
        .max_retries(0)
        .build()
}

/// The signature the server should see for a request to `endpoint`,
/// recomputed over the mock server's full URL.
fn expected_signature(server: &MockServer, endpoint: &str, body: Option<&str>) -> String {
    let url = format!("{}{}", server.uri(), endpoint);
    sign_request(&Credentials::new(API_KEY, SECRET_KEY), &url, NONCE, body).unwrap()
}

#[tokio::test]
async fn test_get_balance_signs_the_transmitted_url() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "amount": "36.62",
        "currency": "BTC"
    });

    Mock::given(method("GET"))
        .and(path("/account/balance"))
        .and(header("ACCESS_KEY", API_KEY))
        .and(header("ACCESS_NONCE", NONCE.to_string().as_str()))
        .and(header(
            "ACCESS_SIGNATURE",
            expected_signature(&server, "/account/balance", None).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let balance = client.get_balance().await.unwrap().record().unwrap();

    assert_eq!(balance.amount, "36.62".parse().unwrap());
    assert_eq!(balance.currency, "BTC");
}

#[tokio::test]
async fn test_query_string_is_part_of_the_signed_url() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "amount": "883.10",
        "currency": "USD"
    });

    Mock::given(method("GET"))
        .and(path("/prices/spot_rate"))
        .and(query_param("currency", "USD"))
        .and(header(
            "ACCESS_SIGNATURE",
            expected_signature(&server, "/prices/spot_rate?currency=USD", None).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let rate = client.get_spot_rate("USD").await.unwrap().record().unwrap();

    assert_eq!(rate.amount, "883.10".parse().unwrap());
}

#[tokio::test]
async fn test_buy_signs_the_exact_body_bytes() {
    let server = MockServer::start().await;
    let request = BuyRequest::new("1.5".parse().unwrap());
    let body = serde_json::to_string(&request).unwrap();
    let response = serde_json::json!({
        "success": true,
        "transfer": {
            "type": "Buy",
            "code": "6H7GYLXZ",
            "created_at": "2014-02-26T13:31:45-08:00",
            "fees": {
                "coinbase": {"cents": 14, "currency_iso": "USD"},
                "bank": {"cents": 15, "currency_iso": "USD"}
            },
            "status": "created",
            "payout_date": "2014-03-01T18:00:00-08:00",
            "btc": {"amount": "1.50000000", "currency": "BTC"},
            "subtotal": {"amount": "13.55", "currency": "USD"},
            "total": {"amount": "13.84", "currency": "USD"}
        }
    });

    Mock::given(method("POST"))
        .and(path("/buys"))
        .and(body_string(body.clone()))
        .and(header("content-type", "application/json"))
        .and(header(
            "ACCESS_SIGNATURE",
            expected_signature(&server, "/buys", Some(&body)).as_str(),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client.buy(&request).await.unwrap().record().unwrap();

    assert!(result.success);
    assert_eq!(result.transfer.unwrap().code, "6H7GYLXZ");
}

#[tokio::test]
async fn test_send_money_wraps_body_in_transaction_envelope() {
    let server = MockServer::start().await;
    let request = SendMoneyRequest::btc("user@example.com", "1".parse().unwrap()).notes("Thanks");
    let response = serde_json::json!({
        "success": true,
        "transaction": {
            "id": "501a1791f8182b2071000087",
            "created_at": "2014-02-26T13:31:45-08:00",
            "notes": "Thanks",
            "amount": {"amount": "-1.00000000", "currency": "BTC"},
            "request": false,
            "status": "pending",
            "sender": {"id": "1", "email": "me@example.com", "name": "Me"},
            "recipient": {"id": "2", "email": "user@example.com", "name": "User"}
        }
    });

    Mock::given(method("POST"))
        .and(path("/transactions/send_money"))
        .and(wiremock::matchers::body_string_contains("\"transaction\""))
        .and(wiremock::matchers::body_string_contains("user@example.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client.send_money(&request).await.unwrap().record().unwrap();

    let transaction = result.transaction.unwrap();
    assert_eq!(transaction.status, "pending");
    assert!(!transaction.request);
}

#[tokio::test]
async fn test_request_money_fiat_body_shape() {
    let server = MockServer::start().await;
    let request =
        RequestMoneyRequest::in_currency("payer@example.com", "20.00".parse().unwrap(), "USD");
    let response = serde_json::json!({
        "success": true,
        "transaction": {
            "id": "501a3554f8182b2754000003",
            "created_at": "2014-02-26T13:31:45-08:00",
            "amount": {"amount": "20.00", "currency": "USD"},
            "request": true,
            "status": "pending"
        }
    });

    Mock::given(method("POST"))
        .and(path("/transactions/request_money"))
        .and(wiremock::matchers::body_string_contains("amount_string"))
        .and(wiremock::matchers::body_string_contains("amount_currency_iso"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client
        .request_money(&request)
        .await
        .unwrap()
        .record()
        .unwrap();

    assert!(result.transaction.unwrap().request);
}

#[tokio::test]
async fn test_get_transaction_by_id() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "transaction": {
            "id": "5018f833f8182b129c00002f",
            "created_at": "2014-02-26T13:31:45-08:00",
            "hsh": "9d6a7d1112c3db9de5315b421a5153d71413f5f752aff75bf504b77df4e646a3",
            "amount": {"amount": "-1.00000000", "currency": "BTC"},
            "request": false,
            "status": "pending",
            "recipient_address": "37muSN5ZrukVTvyVh3mT5Zc5ew9L9CBare"
        }
    });

    Mock::given(method("GET"))
        .and(path("/transactions/5018f833f8182b129c00002f"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client
        .get_transaction("5018f833f8182b129c00002f")
        .await
        .unwrap()
        .record()
        .unwrap();

    // Lookup responses carry no success flag.
    assert!(result.success.is_none());
    let transaction = result.transaction.unwrap();
    assert_eq!(transaction.id, "5018f833f8182b129c00002f");
    assert!(transaction.hsh.is_some());
}

#[tokio::test]
async fn test_buy_price_flattens_quote() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "subtotal": {"amount": "10.10", "currency": "USD"},
        "fees": [
            {"coinbase": {"amount": "0.10", "currency": "USD"}},
            {"bank": {"amount": "0.15", "currency": "USD"}}
        ],
        "total": {"amount": "10.35", "currency": "USD"},
        "amount": "10.10",
        "currency": "USD"
    });

    Mock::given(method("GET"))
        .and(path("/prices/buy"))
        .and(query_param("qty", "0.5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let quote = client
        .get_buy_price("0.5".parse().unwrap())
        .await
        .unwrap()
        .record()
        .unwrap();

    assert_eq!(quote.subtotal, "10.10".parse().unwrap());
    assert_eq!(quote.coinbase_fee, "0.10".parse().unwrap());
    assert_eq!(quote.bank_fee, "0.15".parse().unwrap());
    assert_eq!(quote.currency, "USD");
}

#[tokio::test]
async fn test_sell_price_without_fees_degrades_to_raw() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "amount": "9.90",
        "currency": "USD"
    });

    Mock::given(method("GET"))
        .and(path("/prices/sell"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let quote = client.get_sell_price("1".parse().unwrap()).await.unwrap();

    assert_eq!(quote.raw().unwrap(), response);
}

#[tokio::test]
async fn test_schema_mismatch_returns_raw() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "success": false,
        "errors": ["This API key is disabled"]
    });

    Mock::given(method("GET"))
        .and(path("/account/balance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let balance = client.get_balance().await.unwrap();

    assert!(balance.is_raw());
    assert_eq!(balance.raw().unwrap(), response);
}

#[tokio::test]
async fn test_non_success_status_returns_raw() {
    let server = MockServer::start().await;
    let response = serde_json::json!({"error": "invalid api key"});

    Mock::given(method("GET"))
        .and(path("/account/receive_address"))
        .respond_with(ResponseTemplate::new(401).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let result = client.get_receive_address().await.unwrap();

    assert_eq!(result.raw().unwrap(), response);
}

#[tokio::test]
async fn test_missing_credentials_never_reaches_the_server() {
    let server = MockServer::start().await;

    let client = CoinbaseRestClient::builder()
        .base_url(server.uri())
        .max_retries(0)
        .build();

    let error = client.get_balance().await.unwrap_err();
    assert!(matches!(error, CoinbaseError::MissingCredentials));

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_contacts_and_payment_methods_decode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "contacts": [
                {"contact": {"email": "user1@example.com"}},
                {"contact": {"email": "user2@example.com"}}
            ],
            "total_count": 2,
            "num_pages": 1,
            "current_page": 1
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/payment_methods"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "payment_methods": [{
                "payment_method": {
                    "id": "530eb5b217cb34e07a000011",
                    "name": "US Bank ****4567",
                    "can_buy": true,
                    "can_sell": true
                }
            }],
            "default_buy": "530eb5b217cb34e07a000011",
            "default_sell": "530eb5b217cb34e07a000011"
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);

    let contacts = client.get_contacts().await.unwrap().record().unwrap();
    assert_eq!(contacts.total_count, 2);
    assert_eq!(
        contacts.contacts[0].contact.email.as_deref(),
        Some("user1@example.com")
    );

    let methods = client.get_payment_methods().await.unwrap().record().unwrap();
    assert!(methods.payment_methods[0].payment_method.can_buy);
    assert_eq!(
        methods.default_buy.as_deref(),
        Some("530eb5b217cb34e07a000011")
    );
}
