//! User account registry.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use saffron_core::Email;

use super::RepositoryError;
use crate::models::UserAccount;

/// Access to registered accounts, keyed by email. Accounts are never
/// deleted.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up an account by email.
    async fn get(&self, email: &Email) -> Result<Option<UserAccount>, RepositoryError>;

    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email is already
    /// registered.
    async fn insert(&self, account: UserAccount) -> Result<(), RepositoryError>;

    /// Mark an account's email as verified. Returns `false` if the
    /// account doesn't exist.
    async fn set_verified(&self, email: &Email) -> Result<bool, RepositoryError>;

    /// Replace an account's password hash. Returns `false` if the
    /// account doesn't exist.
    async fn set_password_hash(
        &self,
        email: &Email,
        password_hash: String,
    ) -> Result<bool, RepositoryError>;
}

/// In-memory user registry.
#[derive(Default)]
pub struct InMemoryUserStore {
    accounts: RwLock<HashMap<Email, UserAccount>>,
}

impl InMemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn get(&self, email: &Email) -> Result<Option<UserAccount>, RepositoryError> {
        let accounts = self.accounts.read()?;
        Ok(accounts.get(email).cloned())
    }

    async fn insert(&self, account: UserAccount) -> Result<(), RepositoryError> {
        let mut accounts = self.accounts.write()?;
        if accounts.contains_key(&account.email) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }
        accounts.insert(account.email.clone(), account);
        Ok(())
    }

    async fn set_verified(&self, email: &Email) -> Result<bool, RepositoryError> {
        let mut accounts = self.accounts.write()?;
        match accounts.get_mut(email) {
            Some(account) => {
                account.verified = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_password_hash(
        &self,
        email: &Email,
        password_hash: String,
    ) -> Result<bool, RepositoryError> {
        let mut accounts = self.accounts.write()?;
        match accounts.get_mut(email) {
            Some(account) => {
                account.password_hash = password_hash;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account(email: &str) -> UserAccount {
        UserAccount {
            email: Email::parse(email).expect("valid email"),
            name: "Test".to_owned(),
            password_hash: "hash".to_owned(),
            verified: false,
        }
    }

    #[tokio::test]
    async fn test_insert_then_get() {
        let store = InMemoryUserStore::new();
        store.insert(account("a@b.com")).await.expect("insert");

        let email = Email::parse("a@b.com").expect("valid email");
        let found = store.get(&email).await.expect("get").expect("present");
        assert_eq!(found.name, "Test");
        assert!(!found.verified);
    }

    #[tokio::test]
    async fn test_duplicate_insert_conflicts() {
        let store = InMemoryUserStore::new();
        store.insert(account("a@b.com")).await.expect("insert");

        let result = store.insert(account("a@b.com")).await;
        assert!(matches!(result, Err(RepositoryError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_set_verified() {
        let store = InMemoryUserStore::new();
        store.insert(account("a@b.com")).await.expect("insert");

        let email = Email::parse("a@b.com").expect("valid email");
        assert!(store.set_verified(&email).await.expect("set"));
        assert!(store.get(&email).await.expect("get").expect("present").verified);

        let missing = Email::parse("x@y.com").expect("valid email");
        assert!(!store.set_verified(&missing).await.expect("set"));
    }

    #[tokio::test]
    async fn test_set_password_hash() {
        let store = InMemoryUserStore::new();
        store.insert(account("a@b.com")).await.expect("insert");

        let email = Email::parse("a@b.com").expect("valid email");
        assert!(store
            .set_password_hash(&email, "new-hash".to_owned())
            .await
            .expect("set"));
        let found = store.get(&email).await.expect("get").expect("present");
        assert_eq!(found.password_hash, "new-hash");
    }
}
