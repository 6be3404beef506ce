//! Coinbase REST API client implementation.

use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Method, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;

use crate::auth::{
    ClockNonce, CredentialsProvider, NonceProvider, SignedRequestParams,
};
use crate::auth::{ACCESS_KEY_HEADER, ACCESS_NONCE_HEADER, ACCESS_SIGNATURE_HEADER};
use crate::error::CoinbaseError;
use crate::rest::endpoints::COINBASE_BASE_URL;
use crate::types::Shaped;

/// The Coinbase REST API client.
///
/// Each operation issues one HTTP request and awaits the response. The
/// underlying [`reqwest::Client`] is shared across calls for connection
/// pooling, but request headers, including the signing headers, are
/// computed fresh for every call and never stored on the client.
///
/// Nonces are taken from the clock at signing time, so concurrent callers
/// sharing one credential should serialize sign-to-send; a nonce arriving
/// out of order can be rejected by the server as a stale timestamp.
///
/// # Example
///
/// ```rust,no_run
/// use coinbase_api_client::rest::CoinbaseRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints need no credentials.
///     let client = CoinbaseRestClient::new();
///     let rates = client.get_exchange_rates().await?;
///     println!("btc_to_usd: {:?}", rates.get("btc_to_usd"));
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use coinbase_api_client::rest::CoinbaseRestClient;
/// use coinbase_api_client::auth::StaticCredentials;
/// use std::sync::Arc;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let credentials = Arc::new(StaticCredentials::new("api_key", "secret_key"));
///     let client = CoinbaseRestClient::builder()
///         .credentials(credentials)
///         .build();
///
///     let balance = client.get_balance().await?;
///     println!("Balance: {:?}", balance);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinbaseRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl CoinbaseRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`CoinbaseRestClient::builder()`] to configure credentials for
    /// private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinbaseRestClientBuilder {
        CoinbaseRestClientBuilder::new()
    }

    /// Make a public GET request and decode the JSON response strictly.
    pub(crate) async fn public_get<T>(&self, endpoint: &str) -> Result<T, CoinbaseError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CoinbaseError::InvalidResponse(format!(
                "HTTP {status}: {body}"
            )));
        }
        serde_json::from_str(&body).map_err(|e| {
            CoinbaseError::InvalidResponse(format!("Failed to parse response: {e}. Body: {body}"))
        })
    }

    /// Make a public GET request returning the raw response body.
    pub(crate) async fn public_get_text(
        &self,
        endpoint: &str,
        query_string: &str,
    ) -> Result<String, CoinbaseError> {
        let url = if query_string.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query_string)
        };
        let response = self.http_client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CoinbaseError::InvalidResponse(format!(
                "HTTP {status} from {endpoint}"
            )));
        }
        Ok(response.text().await?)
    }

    /// Make an authenticated GET request.
    pub(crate) async fn private_get<T>(&self, endpoint: &str) -> Result<Shaped<T>, CoinbaseError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.signed_send(Method::GET, &url, None).await?;
        let (status, value) = Self::response_value(response).await?;
        Ok(Self::shape(status, value))
    }

    /// Make an authenticated GET request with query parameters.
    ///
    /// The query string becomes part of the transmitted URL and therefore
    /// part of the signed message.
    pub(crate) async fn private_get_with_params<T, Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<Shaped<T>, CoinbaseError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let (status, value) = self.private_get_value(endpoint, params).await?;
        Ok(Self::shape(status, value))
    }

    /// Authenticated GET returning the decoded JSON without shaping.
    pub(crate) async fn private_get_value<Q>(
        &self,
        endpoint: &str,
        params: &Q,
    ) -> Result<(StatusCode, Value), CoinbaseError>
    where
        Q: serde::Serialize + ?Sized,
    {
        let query_string = serde_urlencoded::to_string(params)
            .map_err(|e| CoinbaseError::InvalidResponse(e.to_string()))?;
        let url = if query_string.is_empty() {
            format!("{}{}", self.base_url, endpoint)
        } else {
            format!("{}{}?{}", self.base_url, endpoint, query_string)
        };
        let response = self.signed_send(Method::GET, &url, None).await?;
        Self::response_value(response).await
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn private_post<T, P>(
        &self,
        endpoint: &str,
        params: &P,
    ) -> Result<Shaped<T>, CoinbaseError>
    where
        T: serde::de::DeserializeOwned,
        P: serde::Serialize,
    {
        // Serialized exactly once: the same bytes are signed and transmitted.
        let body = serde_json::to_string(params)?;
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.signed_send(Method::POST, &url, Some(body)).await?;
        let (status, value) = Self::response_value(response).await?;
        Ok(Self::shape(status, value))
    }

    /// Sign and transmit one request.
    ///
    /// The signature covers the full URL (query string included) and the
    /// exact body bytes. A fresh token is computed for every request.
    async fn signed_send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
    ) -> Result<reqwest::Response, CoinbaseError> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(CoinbaseError::MissingCredentials)?;
        let creds = credentials.credentials();

        let nonce = self.nonce_provider.next_nonce();
        let token = SignedRequestParams::build(creds, url, nonce, body.as_deref())?;

        tracing::debug!(%method, url, nonce, "sending signed request");

        let mut request = self
            .http_client
            .request(method, url)
            .header(ACCESS_KEY_HEADER, &token.access_key)
            .header(ACCESS_NONCE_HEADER, token.access_nonce.to_string())
            .header(ACCESS_SIGNATURE_HEADER, &token.access_signature);
        if let Some(body) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }

        Ok(request.send().await?)
    }

    /// Decode a response body as JSON, keeping the HTTP status.
    async fn response_value(
        response: reqwest::Response,
    ) -> Result<(StatusCode, Value), CoinbaseError> {
        let status = response.status();
        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body).map_err(|e| {
            CoinbaseError::InvalidResponse(format!("Failed to parse response: {e}. Body: {body}"))
        })?;
        Ok((status, value))
    }

    /// Shape a decoded response: a 2xx body matching `T` becomes a record,
    /// anything else is handed back raw.
    fn shape<T>(status: StatusCode, value: Value) -> Shaped<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if !status.is_success() {
            return Shaped::Raw(value);
        }
        match T::deserialize(&value) {
            Ok(record) => Shaped::Record(record),
            Err(_) => Shaped::Raw(value),
        }
    }
}

impl Default for CoinbaseRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinbaseRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseRestClient")
            .field("base_url", &self.base_url)
            .field("has_credentials", &self.credentials.is_some())
            .finish()
    }
}

/// Builder for [`CoinbaseRestClient`].
pub struct CoinbaseRestClientBuilder {
    base_url: String,
    credentials: Option<Arc<dyn CredentialsProvider>>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    user_agent: Option<String>,
    max_retries: u32,
}

impl CoinbaseRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: COINBASE_BASE_URL.to_string(),
            credentials: None,
            nonce_provider: None,
            user_agent: None,
            max_retries: 3,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials provider for authenticated requests.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialsProvider>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set a custom nonce provider.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the maximum number of retries for transient failures.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> CoinbaseRestClient {
        // Default headers carry only the user agent. Signing headers are
        // per-request and must never live here.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("coinbase-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("coinbase-api-client"));
        headers.insert(USER_AGENT, header_value);

        let reqwest_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.max_retries);

        let client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        let nonce_provider = self
            .nonce_provider
            .unwrap_or_else(|| Arc::new(ClockNonce::new()));

        CoinbaseRestClient {
            http_client: client,
            base_url: self.base_url,
            credentials: self.credentials,
            nonce_provider,
        }
    }
}

impl Default for CoinbaseRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
