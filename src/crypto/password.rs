//! Password hashing and verification
//!
//! Wraps bcrypt with an explicit salt so hashing is deterministic for a
//! given salt and cost.

use rand::Rng;
use crate::error::{TodoError, Result};

/// bcrypt salt length in bytes
pub const SALT_LENGTH: usize = 16;

/// Raw bcrypt salt
pub type Salt = [u8; SALT_LENGTH];

/// Generate a fresh random salt.
///
/// Called once per registration; salts are never reused across users.
pub fn generate_salt() -> Salt {
    let mut salt = [0u8; SALT_LENGTH];
    rand::rng().fill(&mut salt);
    salt
}

/// Hash a password with the given salt and cost.
///
/// # Arguments
/// * `password` - Plain-text password (hashed as UTF-8 bytes)
/// * `salt` - 16-byte salt
/// * `cost` - bcrypt cost factor (4..=31)
///
/// # Returns
/// The hash in modular crypt format, as bytes
///
/// # Example
/// ```
/// use listomaker::crypto::{generate_salt, hash_password, verify_password};
///
/// let salt = generate_salt();
/// let hash = hash_password("pw1", &salt, 4).unwrap();
/// assert!(verify_password("pw1", &hash).unwrap());
/// assert!(!verify_password("pw2", &hash).unwrap());
/// ```
pub fn hash_password(password: &str, salt: &Salt, cost: u32) -> Result<Vec<u8>> {
    let parts = bcrypt::hash_with_salt(password.as_bytes(), cost, *salt)?;
    Ok(parts.format_for_version(bcrypt::Version::TwoB).into_bytes())
}

/// Verify a password against a stored hash.
///
/// Uses the salt and cost embedded in `hash`. Returns `Ok(false)` on a
/// mismatch; a malformed stored hash is an error.
pub fn verify_password(password: &str, hash: &[u8]) -> Result<bool> {
    let hash = std::str::from_utf8(hash)
        .map_err(|e| TodoError::HashError(format!("Stored hash is not UTF-8: {}", e)))?;
    Ok(bcrypt::verify(password.as_bytes(), hash)?)
}
