//! Authentication module for the Coinbase API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA256 signature generation for authenticated requests

mod credentials;
mod nonce;
mod signature;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, StaticCredentials};
pub use nonce::{ClockNonce, NonceProvider};
pub use signature::{
    ACCESS_KEY_HEADER, ACCESS_NONCE_HEADER, ACCESS_SIGNATURE_HEADER, SignedRequestParams,
    sign_request,
};
