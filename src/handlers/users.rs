use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{info, warn};

use crate::middleware::JsonBody;
use crate::service::hash_password;
use crate::{ShopError, router::ShopState};

const MISSING_CREDENTIALS: &str = "Missing username or password";

#[derive(Debug, Default, Deserialize)]
pub struct CredentialsBody {
    pub username: Option<String>,
    pub password: Option<String>,
}

impl CredentialsBody {
    /// Both fields, or a validation error if either is absent or empty.
    fn require(self) -> Result<(String, String), ShopError> {
        match (self.username, self.password) {
            (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => Ok((u, p)),
            _ => Err(ShopError::Validation(MISSING_CREDENTIALS)),
        }
    }
}

/// POST /register
pub async fn register(
    State(state): State<ShopState>,
    JsonBody(body): JsonBody<CredentialsBody>,
) -> Result<(StatusCode, Json<Value>), ShopError> {
    let (username, password) = body.require()?;
    let password_hash = hash_password(&password);

    state
        .storage
        .insert_user(&username, &password_hash)
        .await
        .inspect_err(|e| {
            if matches!(e, ShopError::DuplicateKey) {
                warn!(%username, "registration rejected: username taken");
            }
        })?;

    info!(%username, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "user registered successfully!" })),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<ShopState>,
    JsonBody(body): JsonBody<CredentialsBody>,
) -> Result<Json<Value>, ShopError> {
    let (username, password) = body.require()?;
    let password_hash = hash_password(&password);

    match state.storage.find_user(&username, &password_hash).await? {
        Some(_) => Ok(Json(json!({ "message": format!("Welcome {username}!") }))),
        None => {
            warn!(%username, "login failed");
            Err(ShopError::InvalidCredentials)
        }
    }
}
