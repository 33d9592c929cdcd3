//! OTP registry.
//!
//! At most one outstanding record exists per email; a new request
//! overwrites the prior one. Deletion policy (consume on success,
//! delete on expiry, retain on mismatch) is applied by the auth
//! service, not here.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use saffron_core::Email;

use super::RepositoryError;
use crate::models::OtpRecord;

/// Access to outstanding one-time codes, keyed by email.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Store a record, replacing any existing one for the same email.
    async fn put(&self, record: OtpRecord) -> Result<(), RepositoryError>;

    /// Look up the outstanding record for an email.
    async fn get(&self, email: &Email) -> Result<Option<OtpRecord>, RepositoryError>;

    /// Delete the record for an email. Returns `false` if none existed.
    async fn delete(&self, email: &Email) -> Result<bool, RepositoryError>;
}

/// In-memory OTP registry.
#[derive(Default)]
pub struct InMemoryOtpStore {
    records: RwLock<HashMap<Email, OtpRecord>>,
}

impl InMemoryOtpStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OtpStore for InMemoryOtpStore {
    async fn put(&self, record: OtpRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.write()?;
        records.insert(record.email.clone(), record);
        Ok(())
    }

    async fn get(&self, email: &Email) -> Result<Option<OtpRecord>, RepositoryError> {
        let records = self.records.read()?;
        Ok(records.get(email).cloned())
    }

    async fn delete(&self, email: &Email) -> Result<bool, RepositoryError> {
        let mut records = self.records.write()?;
        Ok(records.remove(email).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn record(email: &str, otp: &str) -> OtpRecord {
        OtpRecord {
            email: Email::parse(email).expect("valid email"),
            otp: otp.to_owned(),
            expires_at: Utc::now() + Duration::minutes(10),
        }
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_record() {
        let store = InMemoryOtpStore::new();
        store.put(record("a@b.com", "111111")).await.expect("put");
        store.put(record("a@b.com", "222222")).await.expect("put");

        let email = Email::parse("a@b.com").expect("valid email");
        let found = store.get(&email).await.expect("get").expect("present");
        assert_eq!(found.otp, "222222");
    }

    #[tokio::test]
    async fn test_delete_reports_absence() {
        let store = InMemoryOtpStore::new();
        let email = Email::parse("a@b.com").expect("valid email");
        assert!(!store.delete(&email).await.expect("delete"));

        store.put(record("a@b.com", "111111")).await.expect("put");
        assert!(store.delete(&email).await.expect("delete"));
        assert!(store.get(&email).await.expect("get").is_none());
    }
}
