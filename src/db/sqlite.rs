use crate::db::models::{Product, UserRecord};
use crate::db::schema::SQLITE_INIT;
use crate::error::ShopError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};
use std::path::{Path, PathBuf};

/// Access to the catalog database file.
///
/// Holds connection options only. Every operation opens its own connection,
/// runs its statement and closes it; on error the connection is released
/// when it drops.
#[derive(Clone, Debug)]
pub struct Storage {
    path: PathBuf,
    options: SqliteConnectOptions,
}

impl Storage {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true);
        Self { path, options }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn connect(&self) -> Result<SqliteConnection, ShopError> {
        Ok(self.options.connect().await?)
    }

    /// Create both tables if they are absent. Safe to repeat.
    pub async fn init_schema(&self) -> Result<(), ShopError> {
        let mut conn = self.connect().await?;
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&mut conn).await?;
        }
        conn.close().await?;
        Ok(())
    }

    /// All products in insertion order.
    pub async fn list_products(&self) -> Result<Vec<Product>, ShopError> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query_as::<_, Product>("SELECT id, name, price FROM products ORDER BY id")
            .fetch_all(&mut conn)
            .await?;
        conn.close().await?;
        Ok(rows)
    }

    /// Insert one product and return its generated id.
    ///
    /// `None` values are bound as NULL and rejected by the table constraints.
    pub async fn insert_product(
        &self,
        name: Option<&str>,
        price: Option<f64>,
    ) -> Result<i64, ShopError> {
        let mut conn = self.connect().await?;
        let result = sqlx::query("INSERT INTO products (name, price) VALUES (?, ?)")
            .bind(name)
            .bind(price)
            .execute(&mut conn)
            .await?;
        conn.close().await?;
        Ok(result.last_insert_rowid())
    }

    /// Insert a user. An existing `username` yields [`ShopError::DuplicateKey`].
    pub async fn insert_user(&self, username: &str, password_hash: &str) -> Result<(), ShopError> {
        let mut conn = self.connect().await?;
        sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
            .bind(username)
            .bind(password_hash)
            .execute(&mut conn)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_unique_violation() => ShopError::DuplicateKey,
                other => ShopError::Database(other),
            })?;
        conn.close().await?;
        Ok(())
    }

    pub async fn find_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<UserRecord>, ShopError> {
        let mut conn = self.connect().await?;
        let user = sqlx::query_as::<_, UserRecord>(
            r#"SELECT id, username, password AS password_hash
               FROM users WHERE username = ? AND password = ?"#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_optional(&mut conn)
        .await?;
        conn.close().await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn fresh_storage() -> (TempDir, Storage) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let storage = Storage::new(dir.path().join("products.db"));
        storage.init_schema().await.expect("schema init failed");
        (dir, storage)
    }

    #[tokio::test]
    async fn init_schema_is_idempotent() {
        let (_dir, storage) = fresh_storage().await;
        storage.insert_product(Some("Widget"), Some(9.99)).await.unwrap();

        storage.init_schema().await.expect("second init failed");

        let products = storage.list_products().await.unwrap();
        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn insert_product_assigns_fresh_ids() {
        let (_dir, storage) = fresh_storage().await;

        let first = storage.insert_product(Some("Widget"), Some(9.99)).await.unwrap();
        let second = storage.insert_product(Some("Gadget"), Some(3.5)).await.unwrap();
        assert_ne!(first, second);

        let products = storage.list_products().await.unwrap();
        assert_eq!(
            products,
            vec![
                Product {
                    id: first,
                    name: "Widget".to_string(),
                    price: 9.99
                },
                Product {
                    id: second,
                    name: "Gadget".to_string(),
                    price: 3.5
                },
            ]
        );
    }

    #[tokio::test]
    async fn insert_product_without_name_is_a_storage_error() {
        let (_dir, storage) = fresh_storage().await;

        let err = storage.insert_product(None, Some(1.0)).await.unwrap_err();
        assert!(matches!(err, ShopError::Database(_)));
        assert!(storage.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn duplicate_username_is_reported_distinctly() {
        let (_dir, storage) = fresh_storage().await;

        storage.insert_user("alice", "h1").await.unwrap();
        let err = storage.insert_user("alice", "h2").await.unwrap_err();
        assert!(matches!(err, ShopError::DuplicateKey));

        assert!(storage.find_user("alice", "h2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_user_requires_matching_hash() {
        let (_dir, storage) = fresh_storage().await;
        storage.insert_user("alice", "h1").await.unwrap();

        let user = storage.find_user("alice", "h1").await.unwrap().unwrap();
        assert_eq!(user.username, "alice");
        assert_eq!(user.password_hash, "h1");

        assert!(storage.find_user("alice", "nope").await.unwrap().is_none());
        assert!(storage.find_user("bob", "h1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn operations_fail_before_schema_exists() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path().join("products.db"));

        let err = storage.list_products().await.unwrap_err();
        assert!(matches!(err, ShopError::Database(_)));
    }
}
