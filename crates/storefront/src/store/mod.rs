//! Storage layer for the storefront.
//!
//! Every entity is accessed through a trait (`MenuStore`, `CartStore`,
//! `OrderStore`, `UserStore`, `OtpStore`, `CustomerStore`) so the
//! in-memory implementations shipped here can be swapped for a database
//! backend without touching the services. The in-memory stores are
//! process-wide singletons with no per-user isolation: every request
//! sees the same collections, exactly like the mock backend this
//! replaces.
//!
//! Stores hold data and enforce only structural invariants (unique keys,
//! merge-on-add). Business rules such as status transitions, OTP expiry,
//! and credential checks live in the services.

use thiserror::Error;

pub mod cart;
pub mod customers;
pub mod menu;
pub mod orders;
pub mod otp;
pub mod users;

pub use cart::{CartStore, InMemoryCartStore};
pub use customers::{CustomerStore, InMemoryCustomerStore};
pub use menu::{InMemoryMenuStore, MenuStore};
pub use orders::{InMemoryOrderStore, OrderStore};
pub use otp::{InMemoryOtpStore, OtpStore};
pub use users::{InMemoryUserStore, UserStore};

/// Errors that can occur in the storage layer.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Record not found.
    #[error("record not found")]
    NotFound,

    /// Unique-key violation.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A store lock was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    LockPoisoned,

    /// Stored data failed an integrity check.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

impl<T> From<std::sync::PoisonError<T>> for RepositoryError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::LockPoisoned
    }
}
