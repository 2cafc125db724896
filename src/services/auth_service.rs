//! Authentication service

use crate::error::{AppError, AppResult};
use crate::models::Account;
use crate::store::AccountStore;

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new account
    pub fn register(store: &AccountStore, username: &str, password: &str) -> AppResult<()> {
        store
            .register(Account {
                username: username.to_string(),
                password: password.to_string(),
            })
            .map_err(|_| AppError::AlreadyExists("User already exists.".to_string()))?;

        tracing::info!(username, "user registered");
        Ok(())
    }

    /// Check credentials
    ///
    /// Unknown username and wrong password produce the identical error so
    /// a caller cannot probe which half failed.
    pub fn login(store: &AccountStore, username: &str, password: &str) -> AppResult<()> {
        if !store.verify(username, password) {
            return Err(AppError::InvalidCredentials);
        }

        tracing::info!(username, "user logged in");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_then_login() {
        let store = AccountStore::new();
        AuthService::register(&store, "alice", "secret").unwrap();

        assert!(AuthService::login(&store, "alice", "secret").is_ok());
        assert!(matches!(
            AuthService::login(&store, "alice", "wrong"),
            Err(AppError::InvalidCredentials)
        ));
        assert!(matches!(
            AuthService::login(&store, "nobody", "secret"),
            Err(AppError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_duplicate_registration_conflicts() {
        let store = AccountStore::new();
        AuthService::register(&store, "alice", "secret").unwrap();
        assert!(matches!(
            AuthService::register(&store, "alice", "other"),
            Err(AppError::AlreadyExists(_))
        ));
    }
}
