//! Domain services.
//!
//! Services own the business rules and are constructed per-request from
//! references to the shared stores in [`AppState`](crate::state::AppState).
//! They are the single source of truth for cart, order, auth, and
//! customer behavior; route handlers only translate between HTTP and
//! service calls.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod customers;
pub mod orders;

pub use auth::{AuthError, AuthService, LogOtpDelivery, OtpDelivery};
pub use cart::{CartError, CartService};
pub use catalog::{CatalogError, CatalogService};
pub use customers::{CustomerError, CustomerService};
pub use orders::{OrderError, OrderService};
