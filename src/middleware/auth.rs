use axum::extract::{FromRef, FromRequestParts};
use axum::http::{header::AUTHORIZATION, request::Parts};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::error::ShopError;

/// Single shared-secret gate for write endpoints.
///
/// The expected header value is fixed at construction. An unset or empty
/// secret never authorizes anything.
#[derive(Debug, Clone)]
pub struct AuthGate {
    expected: Option<Arc<str>>,
}

impl AuthGate {
    pub fn new(secret: Option<&str>) -> Self {
        let expected = secret
            .filter(|s| !s.is_empty())
            .map(|s| Arc::from(format!("Bearer {s}")));
        Self { expected }
    }

    /// Exact, case-sensitive match against `Bearer <secret>`.
    pub fn authorize(&self, header_value: Option<&str>) -> bool {
        match (self.expected.as_deref(), header_value) {
            (Some(expected), Some(got)) => bool::from(got.as_bytes().ct_eq(expected.as_bytes())),
            _ => false,
        }
    }
}

/// Extractor that rejects the request with 401 unless the `Authorization`
/// header carries the configured bearer token.
#[derive(Debug, Clone, Copy)]
pub struct RequireApiToken;

impl<S> FromRequestParts<S> for RequireApiToken
where
    AuthGate: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ShopError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let gate = AuthGate::from_ref(state);
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        if gate.authorize(header) {
            return Ok(Self);
        }
        warn!(
            path = %parts.uri.path(),
            header_present = header.is_some(),
            "rejected request with invalid bearer token"
        );
        Err(ShopError::Unauthorized)
    }
}
