//! HMAC-SHA256 signature generation for Coinbase API authentication.
//!
//! Private endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA256(nonce + url + body, secret_key))
//! ```
//!
//! The message is the plain concatenation of the nonce (decimal seconds),
//! the full request URL including any query string, and the request body.
//! A request with no body contributes nothing for the body component. The
//! URL and body must be byte-identical to what is transmitted, since the
//! server reconstructs the same concatenation to verify the signature.
//!
//! The result is sent as the `ACCESS_KEY` / `ACCESS_NONCE` /
//! `ACCESS_SIGNATURE` request headers.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::CoinbaseError;

type HmacSha256 = Hmac<Sha256>;

/// Header carrying the API key.
pub const ACCESS_KEY_HEADER: &str = "ACCESS_KEY";
/// Header carrying the request nonce.
pub const ACCESS_NONCE_HEADER: &str = "ACCESS_NONCE";
/// Header carrying the request signature.
pub const ACCESS_SIGNATURE_HEADER: &str = "ACCESS_SIGNATURE";

/// Sign a request for the Coinbase private API.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret key
/// * `url` - The full URL being called, including any query string
/// * `nonce` - The nonce value for this request
/// * `body` - The serialized request body, or `None` for bodyless requests
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 signature.
///
/// # Example
///
/// ```rust
/// use coinbase_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "secret_key");
/// let signature = sign_request(
///     &credentials,
///     "https://coinbase.com/api/v1/account/balance",
///     1393800000,
///     None,
/// )?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    url: &str,
    nonce: u64,
    body: Option<&str>,
) -> Result<String, CoinbaseError> {
    let mut hmac = HmacSha256::new_from_slice(credentials.secret_bytes())
        .map_err(|e| CoinbaseError::Auth(format!("Invalid HMAC key: {e}")))?;

    hmac.update(nonce.to_string().as_bytes());
    hmac.update(url.as_bytes());
    if let Some(body) = body {
        hmac.update(body.as_bytes());
    }
    let hmac_result = hmac.finalize().into_bytes();

    Ok(hex::encode(hmac_result))
}

/// The ephemeral authentication token attached to one signed request.
///
/// Built immediately before the request is transmitted and discarded after.
/// Tokens must never be cached or reused across requests, even identical
/// ones; a reused nonce weakens the replay protection the signature
/// provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequestParams {
    /// The API key identifying the caller.
    pub access_key: String,
    /// The nonce the signature was computed with.
    pub access_nonce: u64,
    /// Lowercase hex HMAC-SHA256 over `nonce + url + body`.
    pub access_signature: String,
}

impl SignedRequestParams {
    /// Sign `url` and `body` with `credentials`, binding the token to `nonce`.
    pub fn build(
        credentials: &Credentials,
        url: &str,
        nonce: u64,
        body: Option<&str>,
    ) -> Result<Self, CoinbaseError> {
        let access_signature = sign_request(credentials, url, nonce, body)?;
        Ok(Self {
            access_key: credentials.api_key.clone(),
            access_nonce: nonce,
            access_signature,
        })
    }
}
