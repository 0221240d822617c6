//! Password hashing, token issuing and the `AuthUser` extractor guarding
//! private routes.

use crate::errors::ApiError;
use crate::schemas::AppState;
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use model::entities::user;
use sea_orm::EntityTrait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use tracing::{debug, error, trace, warn};

/// Legacy header some clients still send the token in.
pub const TOKEN_HEADER: &str = "x-auth-token";

/// JWT claims. `sub` carries the user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Signing material and token lifetime.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl fmt::Debug for TokenKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenKeys")
            .field("ttl_secs", &self.ttl_secs)
            .finish_non_exhaustive()
    }
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs: i64::try_from(ttl_secs).unwrap_or(i64::MAX),
        }
    }

    /// Signs a token for the given user.
    pub fn issue(&self, user_id: i32) -> Result<String, ApiError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|e| {
            error!("Failed to sign token for user {}: {}", user_id, e);
            ApiError::Internal(format!("token signing failed: {}", e))
        })
    }

    /// Checks signature and expiry and returns the user id the token was issued for.
    pub fn verify(&self, token: &str) -> Result<i32, ApiError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(|e| {
            debug!("Token rejected: {}", e);
            ApiError::unauthorized("Token is not valid")
        })?;
        data.claims
            .sub
            .parse::<i32>()
            .map_err(|_| ApiError::unauthorized("Token is not valid"))
    }
}

/// Hashes a password with argon2 and a fresh random salt.
///
/// Runs on the blocking pool; argon2 is deliberately slow.
pub async fn hash_password(password: &str) -> Result<String, ApiError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut rand::thread_rng());
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| ApiError::Internal(format!("password hashing failed: {}", e)))
    })
    .await
    .map_err(|e| ApiError::Internal(format!("password hashing task failed: {}", e)))?
}

/// Checks a password against a stored PHC hash string, on the blocking pool.
pub async fn verify_password(password: &str, stored_hash: &str) -> Result<bool, ApiError> {
    let password = password.to_owned();
    let stored_hash = stored_hash.to_owned();
    tokio::task::spawn_blocking(move || match PasswordHash::new(&stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            error!("Stored password hash is malformed: {}", e);
            false
        }
    })
    .await
    .map_err(|e| ApiError::Internal(format!("password verification task failed: {}", e)))
}

/// Gravatar image for an email address (200px, PG rated, mystery-person fallback).
pub fn gravatar_url(email: &str) -> String {
    let digest = Sha256::digest(email.trim().to_lowercase().as_bytes());
    format!("https://www.gravatar.com/avatar/{:x}?s=200&r=pg&d=mm", digest)
}

/// Reads the token from `Authorization: Bearer ...` or the legacy header.
fn token_from_headers(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| {
            let (scheme, token) = value.split_once(' ')?;
            scheme.eq_ignore_ascii_case("bearer").then(|| token.trim())
        });

    bearer
        .or_else(|| {
            headers
                .get(TOKEN_HEADER)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
        })
        .filter(|token| !token.is_empty())
}

/// The caller of a private route, established from a valid token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        trace!("Authenticating request to {}", parts.uri.path());
        let token = token_from_headers(&parts.headers).ok_or_else(|| {
            warn!("Request to {} carries no token", parts.uri.path());
            ApiError::unauthorized("No token, authorization denied")
        })?;

        let user_id = state.tokens.verify(token)?;

        // Tokens outlive deleted accounts
        if user::Entity::find_by_id(user_id).one(&state.db).await?.is_none() {
            warn!("Token refers to missing user {}", user_id);
            return Err(ApiError::unauthorized("Token is not valid"));
        }

        trace!("Authenticated user {}", user_id);
        Ok(AuthUser { user_id })
    }
}
