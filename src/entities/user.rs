//! User entity with password handling helpers.

use bcrypt::{DEFAULT_COST, hash, verify};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub user_id: i64,
    pub username: String,
    pub password: String,
}

impl User {
    /// Verifies a candidate password against the stored bcrypt hash.
    pub fn verify_password(&self, target_password: &str) -> bool {
        verify(target_password, &self.password).unwrap_or(false)
    }

    /// Hashes a password with bcrypt at the default cost.
    pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
        hash(password, DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_roundtrip() {
        let hashed = User::hash_password("hunter2hunter2").unwrap();
        let user = User {
            user_id: 1,
            username: "alice".to_string(),
            password: hashed,
        };
        assert!(user.verify_password("hunter2hunter2"));
        assert!(!user.verify_password("wrong"));
    }

    #[test]
    fn garbage_hash_never_verifies() {
        let user = User {
            user_id: 1,
            username: "alice".to_string(),
            password: "not-a-bcrypt-hash".to_string(),
        };
        assert!(!user.verify_password("anything"));
    }
}
