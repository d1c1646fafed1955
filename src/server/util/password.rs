//! bcrypt password hashing.
//!
//! Hashes use the standard `$2b$<cost>$...` encoding, so accounts created by earlier
//! deployments with any bcrypt implementation keep working.

use std::sync::OnceLock;

use bcrypt::BcryptError;

#[cfg(not(test))]
const COST: u32 = 10;
#[cfg(test)]
const COST: u32 = 4;

/// Hashes `password` with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, COST)
}

/// Checks `password` against a stored hash.
///
/// Pass `None` when the account does not exist: a throwaway hash is verified instead so
/// unknown usernames cost the same as wrong passwords. Returns `false` for malformed
/// hashes, including plaintext passwords.
pub fn verify_password(password: &str, stored: Option<&str>) -> bool {
    match stored {
        Some(hash) => bcrypt::verify(password, hash).unwrap_or(false),
        None => {
            if let Some(hash) = placeholder_hash() {
                let _ = bcrypt::verify(password, hash);
            }
            false
        }
    }
}

fn placeholder_hash() -> Option<&'static str> {
    static PLACEHOLDER: OnceLock<Option<String>> = OnceLock::new();

    PLACEHOLDER
        .get_or_init(|| bcrypt::hash("placeholder", COST).ok())
        .as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let hash = hash_password("segredo").unwrap();

        assert!(hash.starts_with("$2b$"));
        assert!(verify_password("segredo", Some(&hash)));
    }

    #[test]
    fn rejects_wrong_password() {
        let hash = hash_password("segredo").unwrap();

        assert!(!verify_password("outro", Some(&hash)));
    }

    #[test]
    fn salts_each_hash() {
        assert_ne!(
            hash_password("segredo").unwrap(),
            hash_password("segredo").unwrap()
        );
    }

    /// Tests a hash produced by another bcrypt implementation.
    ///
    /// Expected: the OpenBSD `$2a$` reference hash verifies
    #[test]
    fn verifies_existing_bcrypt_hashes() {
        let hash = "$2a$05$CCCCCCCCCCCCCCCCCCCCC.E5YPO9kmyuRGyh0XouQYb4YMJKvyOeW";

        assert!(verify_password("U*U", Some(hash)));
        assert!(!verify_password("U*U*", Some(hash)));
    }

    #[test]
    fn rejects_plaintext_and_malformed_hashes() {
        assert!(!verify_password("segredo", Some("segredo")));
        assert!(!verify_password("segredo", Some("sha256$1$00$00")));
    }

    #[test]
    fn missing_account_never_verifies() {
        assert!(!verify_password("placeholder", None));
        assert!(!verify_password("segredo", None));
    }
}
