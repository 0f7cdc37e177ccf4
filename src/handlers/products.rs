use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};
use tracing::info;

use crate::db::{CreatedProduct, NewProduct, Product};
use crate::middleware::{JsonBody, RequireApiToken};
use crate::{ShopError, router::ShopState};

/// GET /products -> every product in insertion order.
pub async fn list_products(State(state): State<ShopState>) -> Result<Json<Vec<Product>>, ShopError> {
    let products = state.storage.list_products().await?;
    Ok(Json(products))
}

/// POST /products -> inserts one product. Requires the bearer token.
///
/// `name` and `price` are not checked here; a missing field is rejected by
/// the table's `NOT NULL` constraint and answered with a 500.
pub async fn create_product(
    _auth: RequireApiToken,
    State(state): State<ShopState>,
    JsonBody(body): JsonBody<NewProduct>,
) -> Result<(StatusCode, Json<Value>), ShopError> {
    let id = state
        .storage
        .insert_product(body.name.as_deref(), body.price_value())
        .await?;

    let product = CreatedProduct {
        id,
        name: body.name,
        price: body.price,
    };
    info!(id, name = ?product.name, "product added");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Product added", "product": product })),
    ))
}
