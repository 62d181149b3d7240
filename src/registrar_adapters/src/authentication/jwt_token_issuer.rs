use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use registrar_core::{AuthToken, TokenIssuer, TokenIssuerError, User};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub token_ttl_in_seconds: i64,
}

impl JwtConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Debug, Error)]
pub enum TokenValidationError {
    #[error("Token error: {0}")]
    TokenError(#[from] jsonwebtoken::errors::Error),
}

/// HS256 token issuer. The subject claim is the user id; the email is carried alongside
/// for verifiers that key sessions by address.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    /// Decode and verify a token previously produced by [`JwtTokenIssuer::issue`].
    pub fn validate(&self, token: &str) -> Result<Claims, TokenValidationError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &Validation::default(),
        )?;
        Ok(data.claims)
    }

    fn claims_for(&self, user: &User) -> Result<Claims, TokenIssuerError> {
        let ttl = chrono::Duration::try_seconds(self.config.token_ttl_in_seconds).ok_or(
            TokenIssuerError::UnexpectedError("Failed to create auth token duration".to_string()),
        )?;

        let now = Utc::now();
        let exp = now
            .checked_add_signed(ttl)
            .ok_or(TokenIssuerError::UnexpectedError(
                "Duration out of range".to_string(),
            ))?
            .timestamp();

        Ok(Claims {
            sub: user.id().to_string(),
            email: user.email().as_ref().expose_secret().clone(),
            iat: now.timestamp(),
            exp,
        })
    }
}

#[async_trait::async_trait]
impl TokenIssuer for JwtTokenIssuer {
    #[tracing::instrument(name = "Issuing auth token", skip_all, fields(user_id = %subject.id()))]
    async fn issue(&self, subject: &User) -> Result<AuthToken, TokenIssuerError> {
        let claims = self.claims_for(subject)?;

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map_err(|e| TokenIssuerError::SigningFailed(e.to_string()))?;

        Ok(AuthToken::new(token))
    }
}
