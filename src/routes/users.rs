use axum::{Json, extract::State};

use crate::{
    db::DbPool, dto::auth::UserInfo, error::AppResult, middleware::auth::AuthUser,
    services::auth_service,
};

#[utoipa::path(
    get,
    path = "/api/userinfo",
    responses(
        (status = 200, description = "Current user", body = UserInfo),
        (status = 404, description = "User not found"),
        (status = 403, description = "Missing or malformed Authorization header"),
        (status = 400, description = "Invalid or expired token"),
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
pub async fn user_info(
    State(pool): State<DbPool>,
    user: AuthUser,
) -> AppResult<Json<UserInfo>> {
    let info = auth_service::user_info(&pool, user.user_id).await?;
    Ok(Json(info))
}
