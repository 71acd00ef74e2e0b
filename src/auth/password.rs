//! Argon2id password hashing and verification.
//!
//! Hashes are stored in PHC string format so the algorithm parameters and
//! salt travel with the hash itself.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

/// Hash a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let hash = argon2.hash_password(password.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC-formatted hash.
///
/// Returns `Ok(true)` on a match, `Ok(false)` on a mismatch. Only a
/// malformed stored hash produces an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed_hash = PasswordHash::new(hash)?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSWORD: &str = "share-more-buy-less-21";

    #[test]
    fn stored_hash_verifies_only_the_original_password() {
        let hash = hash_password(PASSWORD).expect("hashing should succeed");
        assert!(hash.starts_with("$argon2id$"), "expected argon2id PHC prefix");

        assert!(verify_password(PASSWORD, &hash).expect("verify should succeed"));
        assert!(!verify_password("share-more-buy-less-22", &hash).expect("verify should succeed"));
    }

    #[test]
    fn same_password_hashes_to_different_strings() {
        // Fresh salt every time; equality would mean the salt is reused
        let first = hash_password(PASSWORD).expect("hashing should succeed");
        let second = hash_password(PASSWORD).expect("hashing should succeed");
        assert_ne!(first, second);
        assert!(verify_password(PASSWORD, &second).expect("verify should succeed"));
    }

    #[test]
    fn malformed_stored_hash_is_an_error_not_a_mismatch() {
        assert!(verify_password(PASSWORD, "not-a-phc-string").is_err());
    }
}
