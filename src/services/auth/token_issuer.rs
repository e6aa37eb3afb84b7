//! Demo token issuing for the login endpoints.
//!
//! Signs HS256 access tokens with the same shared secret the verifier
//! checks against. This is the token source the read/write endpoints
//! expect in their `Authorization: Bearer` header.

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::error::AppError;
use crate::services::auth::policy::Role;

#[derive(Debug, Serialize)]
struct AccessTokenClaims {
    iss: String,
    aud: String,
    sub: String,
    exp: i64,
    jti: String,
    roles: Vec<&'static str>,
}

#[derive(Clone)]
pub struct TokenIssuer {
    issuer: String,
    audience: String,
    ttl_seconds: u64,
    encoding_key: EncodingKey,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .field("audience", &self.audience)
            .field("ttl_seconds", &self.ttl_seconds)
            .finish()
    }
}

impl TokenIssuer {
    pub fn new(secret: &[u8], issuer: String, audience: String, ttl_seconds: u64) -> Self {
        Self {
            issuer,
            audience,
            ttl_seconds,
            encoding_key: EncodingKey::from_secret(secret),
        }
    }

    /// Issue an access token carrying the given role claims.
    pub fn issue(&self, subject: &str, roles: &[Role]) -> Result<String, AppError> {
        let now = chrono::Utc::now().timestamp();
        let exp = now + self.ttl_seconds as i64;

        let claims = AccessTokenClaims {
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
            sub: subject.to_string(),
            exp,
            jti: Uuid::new_v4().to_string(),
            roles: roles.iter().map(Role::as_claim).collect(),
        };

        let mut header = Header::new(Algorithm::HS256);
        header.typ = Some("JWT".to_string());
        jsonwebtoken::encode(&header, &claims, &self.encoding_key).map_err(|e| {
            error!(error = %e, "failed to sign JWT");
            AppError::Internal
        })
    }

    pub fn ttl_seconds(&self) -> u64 {
        self.ttl_seconds
    }
}
