//! Database module: models and schema for the product catalog and user store.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database
//! - `sqlite.rs`: per-operation connection access to the SQLite file

pub mod models;
pub mod schema;
pub mod sqlite;

pub use models::{CreatedProduct, NewProduct, Product, UserRecord};
pub use sqlite::Storage;
