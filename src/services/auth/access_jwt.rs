use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use std::{error::Error as StdError, fmt};

use crate::services::auth::principal::Principal;

// Errors returned by access-token verification + strict claim validation.
#[derive(Debug)]
pub enum AccessJwtError {
    Jwt(jsonwebtoken::errors::Error),
    MissingOrInvalidAud,
    EmptyClaim(&'static str),
}

impl fmt::Display for AccessJwtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jwt(e) => write!(f, "jwt verification failed: {}", e),
            Self::MissingOrInvalidAud => write!(f, "missing or invalid 'aud' claim"),
            Self::EmptyClaim(name) => write!(f, "empty '{}' claim", name),
        }
    }
}

impl StdError for AccessJwtError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Jwt(e) => Some(e),
            _ => None,
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AccessJwtError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Jwt(e)
    }
}

fn aud_is_present_and_valid(aud: &serde_json::Value) -> bool {
    match aud {
        // Typical: aud is a string
        serde_json::Value::String(s) => !s.trim().is_empty(),
        // Also valid: aud is an array of strings
        serde_json::Value::Array(arr) => arr.iter().any(|v| match v {
            serde_json::Value::String(s) => !s.trim().is_empty(),
            _ => false,
        }),
        // Missing claim ends up as Null due to #[serde(default)]
        _ => false,
    }
}

/// Access token (JWT) claims.
///
/// NOTE:
/// - `aud` in JWT can be either string or array; jsonwebtoken validates it via `Validation::set_audience`.
/// - `roles` is optional; a token without it authenticates but passes no policy that needs a role.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessTokenClaims {
    pub iss: String,
    // Keep as Value to accept both string and array. Validation handles audience checks.
    #[serde(default)]
    pub aud: serde_json::Value,

    pub sub: String,
    pub exp: u64,

    #[serde(default)]
    pub roles: Option<Vec<String>>,
}

/// HS256 access-token verifier over the shared secret key.
///
/// - Key material is intentionally not printable via Debug.
/// - Leeway is zero: an expired token is expired, full stop.
#[derive(Clone)]
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl fmt::Debug for AuthService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    pub fn new(secret: &[u8], issuer: &str, audience: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    // Verify and decode a JWT access token.
    pub fn verify(&self, token: &str) -> Result<AccessTokenClaims, jsonwebtoken::errors::Error> {
        let data =
            jsonwebtoken::decode::<AccessTokenClaims>(token, &self.decoding_key, &self.validation)?;

        Ok(data.claims)
    }

    /// Verify + strict claim validation.
    ///
    /// `jsonwebtoken::Validation` already checks:
    /// - signature
    /// - `exp` (zero leeway)
    /// - `iss` and `aud` (because we set them)
    ///
    /// This method additionally checks that the required claims are
    /// present *and not empty* (`iss`, `aud`, `sub`, `exp`).
    pub fn verify_strict(&self, token: &str) -> Result<AccessTokenClaims, AccessJwtError> {
        let claims = self.verify(token)?;

        // `exp` is `u64` so serde guarantees presence, but we still
        // defend against a meaningless value.
        if claims.iss.trim().is_empty() {
            return Err(AccessJwtError::EmptyClaim("iss"));
        }
        if claims.sub.trim().is_empty() {
            return Err(AccessJwtError::EmptyClaim("sub"));
        }
        if claims.exp == 0 {
            return Err(AccessJwtError::EmptyClaim("exp"));
        }
        if !aud_is_present_and_valid(&claims.aud) {
            return Err(AccessJwtError::MissingOrInvalidAud);
        }

        Ok(claims)
    }

    /// Verify + strict claim validation, then convert the claims into the
    /// per-request [`Principal`].
    ///
    /// This is the entry-point for the bearer-auth middleware.
    pub fn verify_principal(&self, token: &str) -> Result<Principal, AccessJwtError> {
        let claims = self.verify_strict(token)?;
        Ok(Principal::new(claims.sub, claims.roles.unwrap_or_default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header};
    use serde_json::json;

    const SECRET: &[u8] = b"test-secret-key-at-least-32-bytes!!";
    const ISSUER: &str = "https://issuer.test";
    const AUDIENCE: &str = "products-api-test";

    fn service() -> AuthService {
        AuthService::new(SECRET, ISSUER, AUDIENCE)
    }

    fn now() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs()
    }

    fn encode(claims: &serde_json::Value) -> String {
        encode_with_secret(claims, SECRET)
    }

    fn encode_with_secret(claims: &serde_json::Value, secret: &[u8]) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    fn valid_claims() -> serde_json::Value {
        json!({
            "iss": ISSUER,
            "aud": AUDIENCE,
            "sub": "reader@demo",
            "exp": now() + 600,
            "roles": ["Reader"],
        })
    }

    #[test]
    fn valid_token_yields_principal_with_roles() {
        let token = encode(&valid_claims());
        let principal = service().verify_principal(&token).unwrap();
        assert_eq!(principal.subject, "reader@demo");
        assert_eq!(principal.roles, vec!["Reader".to_string()]);
    }

    #[test]
    fn token_without_roles_claim_yields_empty_roles() {
        let mut claims = valid_claims();
        claims.as_object_mut().unwrap().remove("roles");
        let token = encode(&claims);
        let principal = service().verify_principal(&token).unwrap();
        assert!(principal.roles.is_empty());
    }

    #[test]
    fn expired_token_is_rejected() {
        let mut claims = valid_claims();
        claims["exp"] = json!(now() - 120);
        let token = encode(&claims);
        assert!(matches!(
            service().verify_principal(&token),
            Err(AccessJwtError::Jwt(_))
        ));
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let mut claims = valid_claims();
        claims["iss"] = json!("https://somebody-else.test");
        let token = encode(&claims);
        assert!(service().verify_principal(&token).is_err());
    }

    #[test]
    fn wrong_audience_is_rejected() {
        let mut claims = valid_claims();
        claims["aud"] = json!("other-api");
        let token = encode(&claims);
        assert!(service().verify_principal(&token).is_err());
    }

    #[test]
    fn wrong_signature_is_rejected() {
        let token = encode_with_secret(&valid_claims(), b"another-secret-key-32-bytes-long!!");
        assert!(service().verify_principal(&token).is_err());
    }

    #[test]
    fn empty_sub_is_rejected_by_strict_validation() {
        let mut claims = valid_claims();
        claims["sub"] = json!("   ");
        let token = encode(&claims);
        assert!(matches!(
            service().verify_principal(&token),
            Err(AccessJwtError::EmptyClaim("sub"))
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(service().verify_principal("not-a-jwt").is_err());
    }
}
