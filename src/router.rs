use axum::{
    Router,
    extract::FromRef,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::db::Storage;
use crate::handlers::{products, system, users};
use crate::middleware::AuthGate;

#[derive(Clone)]
pub struct ShopState {
    pub storage: Storage,
    pub auth: AuthGate,
}

impl ShopState {
    pub fn new(storage: Storage, auth: AuthGate) -> Self {
        Self { storage, auth }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(
            Storage::new(&cfg.database_path),
            AuthGate::new(cfg.api_token.as_deref()),
        )
    }
}

impl FromRef<ShopState> for AuthGate {
    fn from_ref(state: &ShopState) -> Self {
        state.auth.clone()
    }
}

/// Routes:
/// - `GET /init` create the schema
/// - `GET /` greeting
/// - `GET /products`, `POST /products` (bearer token)
/// - `POST /register`, `POST /login`
pub fn shop_router(state: ShopState) -> Router {
    Router::new()
        .route("/", get(system::home))
        .route("/init", get(system::init_db))
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
