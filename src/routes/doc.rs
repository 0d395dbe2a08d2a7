use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        artworks::{CreateArtworkForm, DeleteArtworkResponse},
        auth::{LoginRequest, LoginResponse, RegisterRequest, UserInfo},
        cart::{AddToCartRequest, CartEntry},
    },
    models::{Artwork, CartItem, User},
    response::MessageResponse,
    routes::{artworks, auth, cart, health, users},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        users::user_info,
        artworks::create_artwork,
        artworks::list_artworks,
        artworks::delete_artwork,
        cart::cart_list,
        cart::add_to_cart,
        cart::remove_from_cart,
    ),
    components(
        schemas(
            Artwork,
            User,
            CartItem,
            MessageResponse,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            UserInfo,
            AddToCartRequest,
            CartEntry,
            CreateArtworkForm,
            DeleteArtworkResponse,
            health::HealthData,
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Artworks", description = "Artwork catalog endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Users", description = "User info endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
