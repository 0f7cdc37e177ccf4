use axum::{Json, extract::State};
use serde_json::{Value, json};
use tracing::info;

use crate::{ShopError, router::ShopState};

/// GET / -> static greeting.
pub async fn home() -> Json<Value> {
    Json(json!({ "message": "Hello from our first Flask Server!" }))
}

/// GET /init -> creates the schema if it is absent.
pub async fn init_db(State(state): State<ShopState>) -> Result<Json<Value>, ShopError> {
    state.storage.init_schema().await?;
    info!(path = %state.storage.path().display(), "database schema ready");
    Ok(Json(json!({ "message": "Database Init complete!" })))
}
