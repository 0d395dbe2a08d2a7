use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Tokens are valid for one hour from issuance.
pub fn token_ttl() -> Duration {
    Duration::hours(1)
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

pub fn issue_token(user_id: Uuid, secret: &str) -> AppResult<String> {
    let expiration = Utc::now()
        .checked_add_signed(token_ttl())
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: user_id.to_string(),
        exp: expiration.timestamp() as usize,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
}

/// Verifies signature and expiry, then extracts the embedded user id.
pub fn decode_token(token: &str, secret: &str) -> AppResult<Uuid> {
    let decoded = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|_| AppError::InvalidToken)?;

    Uuid::parse_str(&decoded.claims.sub).map_err(|_| AppError::InvalidToken)
}

/// Pulls the token out of an `Authorization` header value. The literal
/// `Bearer ` prefix is required and the remainder must be non-empty.
pub fn bearer_token(header: &str) -> AppResult<&str> {
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::AccessDenied)?
        .trim();
    if token.is_empty() {
        return Err(AppError::AccessDenied);
    }
    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret";

    #[test]
    fn issued_token_decodes_to_same_user() {
        let user_id = Uuid::new_v4();
        let token = issue_token(user_id, SECRET).unwrap();
        assert_eq!(decode_token(&token, SECRET).unwrap(), user_id);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue_token(Uuid::new_v4(), SECRET).unwrap();
        assert!(matches!(
            decode_token(&token, "other_secret"),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        // Two hours in the past, well beyond the default validation leeway.
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            exp: (Utc::now() - Duration::hours(2)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(matches!(
            decode_token(&token, SECRET),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_sub_is_rejected() {
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            exp: (Utc::now() + token_ttl()).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();
        assert!(matches!(
            decode_token(&token, SECRET),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn bearer_header_parsing() {
        assert_eq!(bearer_token("Bearer abc.def.ghi").unwrap(), "abc.def.ghi");
        assert!(matches!(bearer_token("abc.def.ghi"), Err(AppError::AccessDenied)));
        assert!(matches!(bearer_token("bearer abc"), Err(AppError::AccessDenied)));
        assert!(matches!(bearer_token("Bearer "), Err(AppError::AccessDenied)));
        assert!(matches!(bearer_token(""), Err(AppError::AccessDenied)));
    }
}
