use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::{
    db::DbPool,
    dto::cart::{AddToCartRequest, CartEntry},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{Artwork, CartItem},
    response::MessageResponse,
};

#[derive(FromRow)]
struct CartWithArtworkRow {
    cart_id: Uuid,
    quantity: i32,
    cart_created_at: DateTime<Utc>,
    artwork_id: Uuid,
    title: String,
    description: String,
    price: i64,
    image_url: String,
    artwork_created_at: DateTime<Utc>,
}

pub async fn list_cart(pool: &DbPool, user: &AuthUser) -> AppResult<Vec<CartEntry>> {
    let rows = sqlx::query_as::<_, CartWithArtworkRow>(
        r#"
        SELECT ci.id AS cart_id, ci.quantity, ci.created_at AS cart_created_at,
               a.id AS artwork_id, a.title, a.description, a.price, a.image_url,
               a.created_at AS artwork_created_at
        FROM cart_items ci
        JOIN artworks a ON a.id = ci.artwork_id
        WHERE ci.user_id = $1
        ORDER BY ci.created_at DESC
        "#,
    )
    .bind(user.user_id)
    .fetch_all(pool)
    .await?;

    let entries = rows
        .into_iter()
        .map(|row| CartEntry {
            id: row.cart_id,
            quantity: row.quantity,
            artwork: Artwork {
                id: row.artwork_id,
                title: row.title,
                description: row.description,
                price: row.price,
                image_url: row.image_url,
                created_at: row.artwork_created_at,
            },
            created_at: row.cart_created_at,
        })
        .collect();

    Ok(entries)
}

pub async fn add_to_cart(
    pool: &DbPool,
    user: &AuthUser,
    payload: AddToCartRequest,
) -> AppResult<CartItem> {
    let quantity = payload.quantity.unwrap_or(1);
    if quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }

    // Single-statement upsert; repeated adds accumulate without a
    // find-then-save window.
    let cart_item = sqlx::query_as::<_, CartItem>(
        r#"
        INSERT INTO cart_items (user_id, artwork_id, quantity)
        VALUES ($1, $2, $3)
        ON CONFLICT (user_id, artwork_id)
        DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity
        RETURNING *
        "#,
    )
    .bind(user.user_id)
    .bind(payload.artwork_id)
    .bind(quantity)
    .fetch_one(pool)
    .await?;

    Ok(cart_item)
}

pub async fn remove_from_cart(
    pool: &DbPool,
    user: &AuthUser,
    artwork_id: Uuid,
) -> AppResult<MessageResponse> {
    // Removal is idempotent; a missing row is still a success.
    sqlx::query("DELETE FROM cart_items WHERE artwork_id = $1 AND user_id = $2")
        .bind(artwork_id)
        .bind(user.user_id)
        .execute(pool)
        .await?;

    Ok(MessageResponse::new("Item removed from cart successfully"))
}
