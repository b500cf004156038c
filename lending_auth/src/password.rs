use crate::error::LendingAuthError;

/// Hash a member password for storage.
pub fn hash_password(password: &str) -> Result<String, LendingAuthError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| {
        LendingAuthError::PasswordHashFailed {
            details: e.to_string(),
        }
    })
}

/// Check a login attempt against the stored hash.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, LendingAuthError> {
    bcrypt::verify(password, password_hash).map_err(|e| LendingAuthError::PasswordHashFailed {
        details: e.to_string(),
    })
}
