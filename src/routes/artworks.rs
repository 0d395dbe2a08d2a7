use axum::{
    Json, Router,
    body::Bytes,
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::{delete, post},
};
use uuid::Uuid;

use crate::{
    config::AppConfig,
    db::DbPool,
    dto::artworks::{CreateArtworkForm, DeleteArtworkResponse},
    error::{AppError, AppResult},
    models::Artwork,
    services::upload,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_artwork).get(list_artworks))
        .route("/{id}", delete(delete_artwork))
}

#[utoipa::path(
    post,
    path = "/api/artworks",
    request_body(content = CreateArtworkForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Artwork created", body = Artwork),
        (status = 400, description = "Missing field or rejected input"),
    ),
    tag = "Artworks"
)]
pub async fn create_artwork(
    State(pool): State<DbPool>,
    State(config): State<AppConfig>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<Artwork>)> {
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut price: Option<String> = None;
    let mut image: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some("title") => {
                title = Some(field.text().await.map_err(|e| AppError::BadRequest(e.to_string()))?)
            }
            Some("description") => {
                description =
                    Some(field.text().await.map_err(|e| AppError::BadRequest(e.to_string()))?)
            }
            Some("price") => {
                price = Some(field.text().await.map_err(|e| AppError::BadRequest(e.to_string()))?)
            }
            Some("image") => {
                let original = field.file_name().unwrap_or("image").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                // An empty file part means no upload was selected.
                if !data.is_empty() {
                    image = Some((original, data));
                }
            }
            _ => {}
        }
    }

    let title = title.ok_or_else(|| AppError::BadRequest("title is required".to_string()))?;
    let description =
        description.ok_or_else(|| AppError::BadRequest("description is required".to_string()))?;
    let price = price
        .ok_or_else(|| AppError::BadRequest("price is required".to_string()))?
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest("price must be a number".to_string()))?;

    let image_url = match image {
        Some((original, data)) => {
            let filename = upload::store_image(&config.upload_dir, &original, data).await?;
            format!("{}/uploads/{}", config.public_url, filename)
        }
        None => String::new(),
    };

    let id = Uuid::new_v4();
    let artwork = sqlx::query_as::<_, Artwork>(
        "INSERT INTO artworks (id, title, description, price, image_url) VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(id)
    .bind(title)
    .bind(description)
    .bind(price)
    .bind(image_url)
    .fetch_one(&pool)
    .await
    .map_err(|e| AppError::BadRequest(e.to_string()))?;

    Ok((StatusCode::CREATED, Json(artwork)))
}

#[utoipa::path(
    get,
    path = "/api/artworks",
    responses(
        (status = 200, description = "All artworks", body = Vec<Artwork>),
    ),
    tag = "Artworks"
)]
pub async fn list_artworks(State(pool): State<DbPool>) -> AppResult<Json<Vec<Artwork>>> {
    let artworks = sqlx::query_as::<_, Artwork>("SELECT * FROM artworks ORDER BY created_at")
        .fetch_all(&pool)
        .await?;

    Ok(Json(artworks))
}

#[utoipa::path(
    delete,
    path = "/api/artworks/{id}",
    params(
        ("id" = Uuid, Path, description = "Artwork ID")
    ),
    responses(
        (status = 200, description = "Deleted artwork", body = DeleteArtworkResponse),
        (status = 404, description = "Artwork not found"),
    ),
    tag = "Artworks"
)]
pub async fn delete_artwork(
    State(pool): State<DbPool>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<DeleteArtworkResponse>> {
    let deleted = sqlx::query_as::<_, Artwork>("DELETE FROM artworks WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(&pool)
        .await?;

    let deleted = match deleted {
        Some(artwork) => artwork,
        None => return Err(AppError::NotFound("Artwork not found".to_string())),
    };

    Ok(Json(DeleteArtworkResponse {
        message: "Artwork deleted successfully".to_string(),
        deleted_artwork: deleted,
    }))
}
