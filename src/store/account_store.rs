//! Account storage

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::RwLock;

use crate::models::Account;

/// Accounts keyed by username
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: RwLock<HashMap<String, Account>>,
}

/// The username is already taken
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("account already exists")]
pub struct AccountConflict;

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new account, rejecting a username that is already taken.
    /// Existing accounts are never overwritten.
    pub fn register(&self, account: Account) -> Result<(), AccountConflict> {
        let mut accounts = self.accounts.write().expect("account store lock poisoned");
        match accounts.entry(account.username.clone()) {
            Entry::Occupied(_) => Err(AccountConflict),
            Entry::Vacant(slot) => {
                slot.insert(account);
                Ok(())
            }
        }
    }

    /// Check a username/password pair. Unknown username and wrong password
    /// are indistinguishable to the caller.
    pub fn verify(&self, username: &str, password: &str) -> bool {
        let accounts = self.accounts.read().expect("account store lock poisoned");
        accounts
            .get(username)
            .is_some_and(|account| account.password == password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(username: &str, password: &str) -> Account {
        Account {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_register_rejects_duplicate_username() {
        let store = AccountStore::new();
        assert!(store.register(account("alice", "first")).is_ok());
        assert_eq!(
            store.register(account("alice", "second")),
            Err(AccountConflict)
        );

        // The original credentials survive the rejected attempt
        assert!(store.verify("alice", "first"));
        assert!(!store.verify("alice", "second"));
    }

    #[test]
    fn test_verify_treats_unknown_user_and_bad_password_alike() {
        let store = AccountStore::new();
        store.register(account("bob", "secret")).unwrap();

        assert!(store.verify("bob", "secret"));
        assert!(!store.verify("bob", "wrong"));
        assert!(!store.verify("nobody", "secret"));
    }
}
