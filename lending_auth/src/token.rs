use anyhow::Context;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Validation, decode, encode};

use crate::error::LendingAuthError;

/// How long an access token stays valid after login.
pub const ACCESS_TOKEN_TTL_HOURS: i64 = 72;

/// The claims carried by a member access token.
#[derive(serde::Serialize, serde::Deserialize, Eq, PartialEq, Debug, Clone)]
pub struct AccessTokenClaims {
    /// The id of the member this token was issued to
    pub sub: i64,
    /// The expiration time of the token
    pub exp: usize,
}

/// Key material for issuing and validating access tokens.
///
/// Built once from the `JWT_SECRET` configuration value and shared through
/// the router state.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Sign a new HS256 access token for the member.
    pub fn issue_access_token(&self, user_id: i64) -> Result<String, LendingAuthError> {
        let exp = (Utc::now() + Duration::hours(ACCESS_TOKEN_TTL_HOURS)).timestamp() as usize;
        self.issue_access_token_expiring_at(user_id, exp)
    }

    fn issue_access_token_expiring_at(
        &self,
        user_id: i64,
        exp: usize,
    ) -> Result<String, LendingAuthError> {
        let claims = AccessTokenClaims { sub: user_id, exp };
        Ok(encode(
            &jsonwebtoken::Header::new(Algorithm::HS256),
            &claims,
            &self.encoding,
        )
        .context("unable to sign access token")?)
    }

    pub fn validate_access_token(&self, token: &str) -> Result<AccessTokenClaims, LendingAuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        // Attempt to decode the token.
        let decoded = match decode::<AccessTokenClaims>(token, &self.decoding, &validation) {
            Ok(decoded) => decoded.claims,
            Err(e) => match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    return Err(LendingAuthError::JwtExpired);
                }
                _ => {
                    return Err(LendingAuthError::JwtValidationFailed {
                        details: e.to_string(),
                    });
                }
            },
        };

        Ok(decoded)
    }
}
