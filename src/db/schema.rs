//! SQL DDL for the catalog database.

/// SQLite schema:
/// - `products`: store-assigned `id`, non-null `name` and `price`
/// - `users`: `username` UNIQUE; `password` holds the hex SHA-256 digest, never plaintext
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    price REAL NOT NULL
);

CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT UNIQUE NOT NULL,
    password TEXT NOT NULL
);
"#;
