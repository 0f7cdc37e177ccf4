use serde::{Deserialize, Serialize};
use serde_json::Number;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
}

/// Body of `POST /products`. Fields stay optional; the store's `NOT NULL`
/// constraints are the only check they get.
///
/// `price` keeps the submitted number so the echo reproduces `5` as `5`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewProduct {
    pub name: Option<String>,
    pub price: Option<Number>,
}

impl NewProduct {
    /// Price as stored in the `REAL` column.
    pub fn price_value(&self) -> Option<f64> {
        self.price.as_ref().and_then(Number::as_f64)
    }
}

/// Echo of an inserted product, including whatever the client sent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreatedProduct {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}
