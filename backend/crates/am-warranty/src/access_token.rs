//! Bearer token issued by the warranty API.
//!
//! The signing secret belongs to the warranty service, so only the `exp`
//! claim is read; the signature is not verified here.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct ExpiryClaims {
    exp: Option<i64>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `exp` claim in seconds since the epoch, if the token carries one
    pub fn expires_at(&self) -> Option<i64> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        decode::<ExpiryClaims>(&self.0, &DecodingKey::from_secret(&[]), &validation)
            .ok()
            .and_then(|data| data.claims.exp)
    }

    /// Opaque tokens and tokens without `exp` never expire locally
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expires_at().is_some_and(|exp| exp <= now)
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(chrono::Utc::now().timestamp())
    }

    /// Short prefix safe for logs
    pub fn prefix(&self) -> String {
        let head: String = self.0.chars().take(12).collect();
        format!("{head}...")
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("AccessToken").field(&self.prefix()).finish()
    }
}
