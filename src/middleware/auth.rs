use axum::{
    extract::{FromRef, FromRequestParts},
    http::header,
};
use uuid::Uuid;

use crate::{config::AppConfig, error::AppError, services::token};

/// Extractor for bearer-protected handlers. A missing or malformed
/// `Authorization` header short-circuits with 403; a token that fails
/// signature or expiry checks short-circuits with 400.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppConfig: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::AccessDenied)?;

        let auth_str = auth_header.to_str().map_err(|_| AppError::AccessDenied)?;
        let raw_token = token::bearer_token(auth_str)?;

        let config = AppConfig::from_ref(state);
        let user_id = token::decode_token(raw_token, &config.jwt_secret)?;

        Ok(AuthUser { user_id })
    }
}
