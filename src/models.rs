use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub uname: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub artwork_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artwork_serializes_with_camel_case_keys() {
        let artwork = Artwork {
            id: Uuid::new_v4(),
            title: "Starry Night".into(),
            description: "oil on canvas".into(),
            price: 25_000,
            image_url: String::new(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&artwork).unwrap();
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("image_url").is_none());
    }

    #[test]
    fn user_never_serializes_password_hash() {
        let user = User {
            id: Uuid::new_v4(),
            email: "alice@example.com".into(),
            uname: "alice".into(),
            password_hash: "$argon2id$...".into(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("passwordHash").is_none());
        assert!(value.get("password_hash").is_none());
    }
}
