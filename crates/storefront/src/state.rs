//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::StorefrontConfig;
use crate::services::{LogOtpDelivery, OtpDelivery};
use crate::store::{
    CartStore, CustomerStore, InMemoryCartStore, InMemoryCustomerStore, InMemoryMenuStore,
    InMemoryOrderStore, InMemoryOtpStore, InMemoryUserStore, MenuStore, OrderStore, OtpStore,
    UserStore,
};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// the shared stores and configuration. Stores are held behind their
/// traits so a database-backed implementation can be substituted
/// without touching handlers or services.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    menu: Box<dyn MenuStore>,
    cart: Box<dyn CartStore>,
    orders: Box<dyn OrderStore>,
    users: Box<dyn UserStore>,
    otps: Box<dyn OtpStore>,
    customers: Box<dyn CustomerStore>,
    otp_delivery: Box<dyn OtpDelivery>,
}

impl AppState {
    /// Create application state with in-memory stores, a seeded menu
    /// catalog, and log-based OTP delivery.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                menu: Box::new(InMemoryMenuStore::seeded()),
                cart: Box::new(InMemoryCartStore::new()),
                orders: Box::new(InMemoryOrderStore::new()),
                users: Box::new(InMemoryUserStore::new()),
                otps: Box::new(InMemoryOtpStore::new()),
                customers: Box::new(InMemoryCustomerStore::new()),
                otp_delivery: Box::new(LogOtpDelivery),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get the menu catalog store.
    #[must_use]
    pub fn menu(&self) -> &dyn MenuStore {
        self.inner.menu.as_ref()
    }

    /// Get the cart store.
    #[must_use]
    pub fn cart(&self) -> &dyn CartStore {
        self.inner.cart.as_ref()
    }

    /// Get the order ledger store.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderStore {
        self.inner.orders.as_ref()
    }

    /// Get the user registry store.
    #[must_use]
    pub fn users(&self) -> &dyn UserStore {
        self.inner.users.as_ref()
    }

    /// Get the OTP registry store.
    #[must_use]
    pub fn otps(&self) -> &dyn OtpStore {
        self.inner.otps.as_ref()
    }

    /// Get the customer profile store.
    #[must_use]
    pub fn customers(&self) -> &dyn CustomerStore {
        self.inner.customers.as_ref()
    }

    /// Get the OTP delivery channel.
    #[must_use]
    pub fn otp_delivery(&self) -> &dyn OtpDelivery {
        self.inner.otp_delivery.as_ref()
    }
}
