//! Customer profile service.

use thiserror::Error;

use saffron_core::Email;

use crate::models::{CustomerProfile, CustomerUpdate};
use crate::store::{CustomerStore, RepositoryError, UserStore};

/// Errors from customer profile operations.
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] saffron_core::EmailError),

    /// No profile exists for the email (update only; reads create
    /// lazily).
    #[error("customer not found")]
    NotFound,

    /// Storage error.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Customer profile reads and partial updates.
pub struct CustomerService<'a> {
    customers: &'a dyn CustomerStore,
    users: &'a dyn UserStore,
}

impl<'a> CustomerService<'a> {
    #[must_use]
    pub const fn new(customers: &'a dyn CustomerStore, users: &'a dyn UserStore) -> Self {
        Self { customers, users }
    }

    /// Fetch the profile for `email`, creating one lazily if absent.
    ///
    /// The new profile's name comes from the registered account when
    /// one exists, otherwise from the email's local part.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::InvalidEmail` for a malformed address.
    pub async fn get_or_create(&self, email: &str) -> Result<CustomerProfile, CustomerError> {
        let email = Email::parse(email)?;

        if let Some(profile) = self.customers.get(&email).await? {
            return Ok(profile);
        }

        let name = match self.users.get(&email).await? {
            Some(account) => account.name,
            None => email.local_part().to_owned(),
        };

        Ok(self.customers.insert(name, email).await?)
    }

    /// Merge the provided fields into an existing profile.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` if no profile exists yet;
    /// update does not create.
    pub async fn update(
        &self,
        email: &str,
        update: CustomerUpdate,
    ) -> Result<CustomerProfile, CustomerError> {
        let email = Email::parse(email)?;
        self.customers
            .update(&email, update)
            .await?
            .ok_or(CustomerError::NotFound)
    }
}
