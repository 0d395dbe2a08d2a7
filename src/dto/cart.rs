use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Artwork;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub artwork_id: Uuid,
    /// Defaults to 1 when omitted.
    pub quantity: Option<i32>,
}

/// A cart row with its artwork reference resolved to the full record.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartEntry {
    pub id: Uuid,
    pub quantity: i32,
    pub artwork: Artwork,
    pub created_at: DateTime<Utc>,
}
