//! Password hashing.
//!
//! Passwords are digested with SHA-256 before storage and before uniqueness
//! comparison; the raw password never reaches the registry.

use sha2::{Digest, Sha256};

/// Hash a password to a 64-character lowercase hex SHA-256 digest
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}
