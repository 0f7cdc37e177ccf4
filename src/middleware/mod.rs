pub mod auth;
pub mod json_body;

pub use auth::{AuthGate, RequireApiToken};
pub use json_body::JsonBody;
