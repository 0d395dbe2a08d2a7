use axum::{Json, Router, extract::State, http::StatusCode, routing::post};

use crate::{
    config::AppConfig,
    db::DbPool,
    dto::auth::{LoginRequest, LoginResponse, RegisterRequest},
    error::AppResult,
    response::MessageResponse,
    services::auth_service::{login_user, register_user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Email already exists", body = MessageResponse)
    ),
    tag = "Auth"
)]
pub async fn register(
    State(pool): State<DbPool>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let resp = register_user(&pool, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login user", body = LoginResponse),
        (status = 400, description = "Invalid email or password", body = MessageResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(pool): State<DbPool>,
    State(config): State<AppConfig>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resp = login_user(&pool, &config.jwt_secret, payload).await?;
    Ok(Json(resp))
}
