//! Customer profile domain types.

use serde::{Deserialize, Serialize};

use saffron_core::{CustomerId, Email};

/// Per-email contact record.
///
/// Created lazily on first read for an email and editable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerProfile {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub address: String,
}

/// Partial update for a customer profile.
///
/// Only the fields present overwrite; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl CustomerUpdate {
    /// Whether the update carries no fields at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.address.is_none()
    }
}
