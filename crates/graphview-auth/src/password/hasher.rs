//! Argon2id password hashing.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher as ArgonHasher, SaltString, rand_core::OsRng},
};

use graphview_core::error::AppError;

/// Hashes passwords with Argon2id.
#[derive(Debug, Clone, Default)]
pub struct PasswordHasher;

impl PasswordHasher {
    /// Creates a hasher with default Argon2id parameters.
    pub fn new() -> Self {
        Self
    }

    /// Hashes a plaintext password with a random salt.
    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))
    }
}

/// Checks a plaintext password against a stored hash.
#[cfg(test)]
pub(crate) fn matches(password: &str, hash: &str) -> bool {
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_matches_only_its_password() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash_password("hunter2").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(matches("hunter2", &hash));
        assert!(!matches("hunter3", &hash));
    }

    #[test]
    fn test_salts_differ() {
        let hasher = PasswordHasher::new();
        assert_ne!(
            hasher.hash_password("same").unwrap(),
            hasher.hash_password("same").unwrap()
        );
    }

    #[test]
    fn test_garbage_hash_never_matches() {
        assert!(!matches("x", "not-a-hash"));
    }
}
