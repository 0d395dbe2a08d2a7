use axum::{Router, routing::get};

use crate::state::AppState;

pub mod artworks;
pub mod auth;
pub mod cart;
pub mod doc;
pub mod health;
pub mod users;

// Everything under /api; register/login live at the root (see auth::router).
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/artworks", artworks::router())
        .nest("/cart", cart::router())
        .route("/userinfo", get(users::user_info))
}
