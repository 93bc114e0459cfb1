//! Password storage for accounts. Registration stores only the Argon2 PHC
//! string; login checks a submitted password against it.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

fn argon2() -> Argon2<'static> {
    Argon2::default()
}

/// Salted Argon2 hash for a new account's password.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    argon2()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            error!(error = %e, "could not hash account password");
            anyhow::anyhow!("password hashing failed: {e}")
        })
}

/// `Ok(false)` for a wrong password. `Err` means the stored hash is corrupt.
pub fn verify_password(plain: &str, stored_hash: &str) -> anyhow::Result<bool> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| {
        error!(error = %e, "stored password hash is unreadable");
        anyhow::anyhow!("stored password hash is unreadable: {e}")
    })?;
    Ok(argon2().verify_password(plain.as_bytes(), &parsed).is_ok())
}
