//! Signed link tokens.
//!
//! A link token is a JWT (HS256) carrying a single claim, `redirect_url`.
//! Tokens carry no expiry: once issued, a token stays valid for the lifetime
//! of the signing key.

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the token codec.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signing primitive itself failed. Treated as an internal error.
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Signature mismatch, structural damage, or a missing/non-string claim.
    #[error("token parse fail or invalid")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

/// Claim set embedded in every link token.
#[derive(Debug, Serialize, Deserialize)]
struct LinkClaims {
    redirect_url: String,
}

/// Signs target URLs into opaque link tokens and verifies them back.
///
/// Stateless apart from the immutable keys; share via `Arc` across handlers.
/// The target URL is treated as an opaque identifier and never validated.
pub struct TokenCodec {
    header: Header,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a codec from the process-wide signing key.
    pub fn new(signing_key: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Tokens carry only the redirect_url claim; no exp to check.
        validation.required_spec_claims.clear();
        validation.validate_exp = false;

        Self {
            header: Header::new(Algorithm::HS256),
            encoding_key: EncodingKey::from_secret(signing_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(signing_key.as_bytes()),
            validation,
        }
    }

    /// Signs a target URL into an opaque token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if the signing primitive fails.
    pub fn encode(&self, url: &str) -> Result<String, TokenError> {
        let claims = LinkClaims {
            redirect_url: url.to_owned(),
        };

        jsonwebtoken::encode(&self.header, &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verifies a token and extracts the target URL.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Invalid`] if the signature does not verify,
    /// the token is structurally malformed, or the `redirect_url` claim is
    /// absent or not a string.
    pub fn decode(&self, token: &str) -> Result<String, TokenError> {
        jsonwebtoken::decode::<LinkClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.redirect_url)
            .map_err(TokenError::Invalid)
    }
}
