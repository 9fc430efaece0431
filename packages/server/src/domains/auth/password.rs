//! Password hashing for admin accounts.
//!
//! bcrypt is CPU-bound (~100ms at this cost), so both operations run on the
//! blocking pool instead of the request executor.

use anyhow::{Context, Result};

/// Fixed bcrypt cost factor for account passwords.
const HASH_COST: u32 = 10;

/// Compute a salted one-way hash of a plaintext password.
pub async fn hash_password(plain: String) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(plain, HASH_COST))
        .await
        .context("Password hashing task panicked")?
        .context("Failed to hash password")
}

/// Check a plaintext password against a stored hash.
pub async fn verify_password(plain: String, hashed: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hashed))
        .await
        .context("Password verification task panicked")?
        .context("Failed to verify password")
}
