//! JWT session tokens
//!
//! Generation, verification and decoding of the signed admin session token.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::identity::AdminIdentity;

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Signing secret
    pub secret: String,
    /// Token lifetime in minutes
    pub expiration_minutes: i64,
    /// Token issuer
    pub issuer: String,
    /// Token audience
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "dev-secret".to_string(),
            expiration_minutes: 1440,
            issuer: "digishop-admin".to_string(),
            audience: "digishop-console".to_string(),
        }
    }
}

/// Claims stored in the session token
///
/// `email` and `isAdmin` are the payload the rest of the system relies on;
/// they are validated at the decode boundary and never trusted from the
/// transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Admin email (subject)
    pub sub: String,
    /// Admin email, duplicated under the console's field name
    pub email: String,
    /// Admin capability flag
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued-at timestamp
    pub iat: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

/// JWT errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Token expired")]
    ExpiredToken,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Token generation failed: {0}")]
    GenerationFailed(String),
}

/// JWT token service
#[derive(Debug, Clone)]
pub struct JwtService {
    pub config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// Create a new JWT service with the given configuration
    pub fn with_config(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Encode an identity into a signed session token
    pub fn issue_session(&self, identity: &AdminIdentity) -> Result<String, JwtError> {
        let now = Utc::now();
        let expiration = now + Duration::minutes(self.config.expiration_minutes);

        let claims = Claims {
            sub: identity.email.clone(),
            email: identity.email.clone(),
            is_admin: identity.is_admin,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            iss: self.config.issuer.clone(),
            aud: self.config.audience.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::GenerationFailed(e.to_string()))
    }

    /// Verify signature, expiry, issuer and audience, then decode
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_audience(&[&self.config.audience]);
        validation.set_issuer(&[&self.config.issuer]);
        validation.set_required_spec_claims(&["sub", "exp", "iat", "iss", "aud"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::ExpiredToken,
                ErrorKind::InvalidSignature => JwtError::InvalidSignature,
                ErrorKind::InvalidToken => JwtError::InvalidToken(e.to_string()),
                _ => JwtError::InvalidToken(format!("Token validation failed: {}", e)),
            }
        })?;

        Ok(token_data.claims)
    }

    /// Extract the token from an Authorization header value
    pub fn extract_from_header(header: &str) -> Option<&str> {
        header.strip_prefix("Bearer ")
    }

    /// Session lifetime in seconds, for the cookie Max-Age
    pub fn session_max_age_secs(&self) -> i64 {
        self.config.expiration_minutes * 60
    }
}

/// Verified admin session (decoded from validated Claims)
///
/// Injected into handlers by the [`AdminSession`] extractor after the
/// token's signature, expiry and `isAdmin` flag checked out.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub email: String,
    pub is_admin: bool,
}

impl From<Claims> for AdminSession {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
            is_admin: claims.is_admin,
        }
    }
}
