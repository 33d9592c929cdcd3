//! Customer profile store.

use std::sync::RwLock;

use async_trait::async_trait;

use saffron_core::{CustomerId, Email};

use super::RepositoryError;
use crate::models::{CustomerProfile, CustomerUpdate};

/// Access to customer contact records, keyed by email.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Look up a profile by email.
    async fn get(&self, email: &Email) -> Result<Option<CustomerProfile>, RepositoryError>;

    /// Insert a fresh profile with empty contact fields. The store
    /// assigns the id.
    async fn insert(
        &self,
        name: String,
        email: Email,
    ) -> Result<CustomerProfile, RepositoryError>;

    /// Merge the provided fields into an existing profile. Returns the
    /// updated profile, or `None` if no profile exists for the email.
    async fn update(
        &self,
        email: &Email,
        update: CustomerUpdate,
    ) -> Result<Option<CustomerProfile>, RepositoryError>;
}

/// In-memory customer store.
#[derive(Default)]
pub struct InMemoryCustomerStore {
    profiles: RwLock<Vec<CustomerProfile>>,
}

impl InMemoryCustomerStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn get(&self, email: &Email) -> Result<Option<CustomerProfile>, RepositoryError> {
        let profiles = self.profiles.read()?;
        Ok(profiles.iter().find(|p| &p.email == email).cloned())
    }

    async fn insert(
        &self,
        name: String,
        email: Email,
    ) -> Result<CustomerProfile, RepositoryError> {
        let mut profiles = self.profiles.write()?;
        if profiles.iter().any(|p| p.email == email) {
            return Err(RepositoryError::Conflict(
                "customer already exists".to_owned(),
            ));
        }

        let id = i32::try_from(profiles.len())
            .map_err(|_| RepositoryError::DataCorruption("customer id overflow".to_owned()))?
            + 1;
        let profile = CustomerProfile {
            id: CustomerId::new(id),
            name,
            email,
            phone: String::new(),
            address: String::new(),
        };
        profiles.push(profile.clone());
        Ok(profile)
    }

    async fn update(
        &self,
        email: &Email,
        update: CustomerUpdate,
    ) -> Result<Option<CustomerProfile>, RepositoryError> {
        let mut profiles = self.profiles.write()?;
        match profiles.iter_mut().find(|p| &p.email == email) {
            Some(profile) => {
                if let Some(name) = update.name {
                    profile.name = name;
                }
                if let Some(phone) = update.phone {
                    profile.phone = phone;
                }
                if let Some(address) = update.address {
                    profile.address = address;
                }
                Ok(Some(profile.clone()))
            }
            None => Ok(None),
        }
    }
}
