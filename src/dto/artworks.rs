use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Artwork;

/// Shape of the multipart form accepted by `POST /api/artworks`.
/// Only used for the OpenAPI document; the handler reads the fields manually.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CreateArtworkForm {
    pub title: String,
    pub description: String,
    pub price: String,
    #[schema(value_type = Option<String>, format = Binary)]
    pub image: Option<Vec<u8>>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteArtworkResponse {
    pub message: String,
    pub deleted_artwork: Artwork,
}
