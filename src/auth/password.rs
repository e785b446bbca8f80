// Password hashing and verification (Argon2id)

use crate::models::user::User;
use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a plaintext password, returning a PHC-format string
pub fn hash_password(plaintext: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(plaintext.as_bytes(), &salt)
        .map_err(|e| anyhow!("Failed to hash password: {}", e))?;

    Ok(hash.to_string())
}

/// Check a plaintext password against a stored PHC-format hash
///
/// Returns false on mismatch or on a malformed stored hash, never an error.
pub fn verify_password(plaintext: &str, stored: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored) else {
        return false;
    };

    Argon2::default()
        .verify_password(plaintext.as_bytes(), &parsed)
        .is_ok()
}

/// Set the credential on a user record
///
/// Hashing happens only when `is_new` is true, i.e. exactly once at account
/// creation. Update paths pass false and the stored hash is left untouched,
/// so an already-hashed value can never be hashed a second time.
pub fn store_password(user: &mut User, plaintext: &str, is_new: bool) -> Result<()> {
    if is_new {
        user.password_hash = hash_password(plaintext)?;
    }

    Ok(())
}
