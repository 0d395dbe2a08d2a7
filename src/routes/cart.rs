use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::cart::{AddToCartRequest, CartEntry},
    error::AppResult,
    middleware::auth::AuthUser,
    response::MessageResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cart_list).post(add_to_cart))
        .route("/{artwork_id}", delete(remove_from_cart))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart items with resolved artworks", body = Vec<CartEntry>)
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn cart_list(
    State(pool): State<DbPool>,
    user: AuthUser,
) -> AppResult<Json<Vec<CartEntry>>> {
    let entries = cart_service::list_cart(&pool, &user).await?;
    Ok(Json(entries))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 201, description = "Item added to cart", body = MessageResponse),
        (status = 400, description = "Bad request"),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(pool): State<DbPool>,
    user: AuthUser,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    cart_service::add_to_cart(&pool, &user, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Item added to cart successfully")),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{artwork_id}",
    params(
        ("artwork_id" = Uuid, Path, description = "Artwork ID")
    ),
    responses(
        (status = 200, description = "Item removed (or was already absent)", body = MessageResponse),
    ),
    security(("bearer_auth" = [])),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(pool): State<DbPool>,
    user: AuthUser,
    Path(artwork_id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    let resp = cart_service::remove_from_cart(&pool, &user, artwork_id).await?;
    Ok(Json(resp))
}
