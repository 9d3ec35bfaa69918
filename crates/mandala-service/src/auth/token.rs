use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use mandala_core::config::AuthConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ServiceError, ServiceResult};

/// JWT payload carried by an admin session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Admin id.
    pub sub: uuid::Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// Identity recovered from a verified token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticatedAdmin {
    pub id: uuid::Uuid,
    pub email: String,
}

impl From<Claims> for AuthenticatedAdmin {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.sub,
            email: claims.email,
        }
    }
}

/// HS256 signing material plus the session lifetime.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenKeys {
    #[must_use]
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(
            config.jwt_secret.as_bytes(),
            Duration::days(i64::from(config.token_ttl_days)),
        )
    }

    /// ## Summary
    /// Signs a token for `admin_id` that expires after the configured lifetime.
    ///
    /// ## Errors
    /// Returns an error if the claims cannot be encoded.
    pub fn issue(&self, admin_id: uuid::Uuid, email: &str) -> ServiceResult<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: admin_id,
            email: email.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| ServiceError::InvalidConfiguration(format!("Failed to sign token: {e}")))
    }

    /// ## Summary
    /// Checks signature and expiry and returns the admin identity.
    ///
    /// ## Errors
    /// Returns [`ServiceError::NotAuthenticated`] for a malformed, forged or expired token.
    pub fn verify(&self, token: &str) -> ServiceResult<AuthenticatedAdmin> {
        let validation = Validation::new(Algorithm::HS256);

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims.into())
            .map_err(|err| {
                tracing::debug!(error = %err, "Rejected admin token");
                ServiceError::NotAuthenticated("Token is not valid".to_string())
            })
    }
}
