use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of the UTF-8 password bytes.
///
/// Unsalted and single-round: not fit for a real deployment, but it is the
/// format already stored in `users.password`, so changing it would lock out
/// every existing account.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
