//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health                  - Health check
//!
//! # Menu
//! GET    /api/menu                - Catalog listing (?search= filters by substring)
//! GET    /api/menu/{id}           - Single item
//!
//! # Cart
//! GET    /api/cart                - Cart snapshot
//! POST   /api/cart/add            - Add item (merges into existing line)
//! PATCH  /api/cart/update         - Set line quantity (<= 0 removes)
//! DELETE /api/cart/remove         - Remove line by id
//! DELETE /api/cart/clear          - Empty the cart
//! POST   /api/cart/checkout       - Place an order from selected lines
//!
//! # Orders
//! POST   /api/orders              - Place an order from explicit lines
//! GET    /api/orders              - Ledger snapshot, newest first
//! POST   /api/orders/{id}/cancel  - Cancel an open order
//! PATCH  /api/orders/{id}/status  - Change status (transition-guarded)
//!
//! # Auth
//! POST   /api/auth/register       - Create an account (starts unverified)
//! POST   /api/auth/login          - Validate credentials
//! POST   /api/auth/otp/request    - Issue a one-time code (rate limited)
//! POST   /api/auth/otp/verify     - Confirm signup code, activate account
//! POST   /api/auth/password/reset - Reset password with a one-time code
//!
//! # Customer
//! GET    /api/customer?email=     - Profile (created lazily)
//! PATCH  /api/customer?email=     - Partial profile update
//! ```
//!
//! All bodies are JSON with camelCase field names; decimal prices are
//! serialized as strings. Errors come back as `{"message": ...}` with
//! the status mapping in [`crate::error`].

pub mod auth;
pub mod cart;
pub mod customer;
pub mod menu;
pub mod orders;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::middleware::otp_rate_limiter;
use crate::state::AppState;

/// Create the menu routes router.
pub fn menu_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(menu::index))
        .route("/{id}", get(menu::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", patch(cart::update))
        .route("/remove", delete(cart::remove))
        .route("/clear", delete(cart::clear))
        .route("/checkout", post(cart::checkout))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(orders::create).get(orders::index))
        .route("/{id}/cancel", post(orders::cancel))
        .route("/{id}/status", patch(orders::update_status))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route(
            "/otp/request",
            post(auth::request_otp).layer(otp_rate_limiter()),
        )
        .route("/otp/verify", post(auth::verify_otp))
        .route("/password/reset", post(auth::reset_password))
}

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new().route("/", get(customer::show).patch(customer::update))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/menu", menu_routes())
        .nest("/api/cart", cart_routes())
        .nest("/api/orders", order_routes())
        .nest("/api/auth", auth_routes())
        .nest("/api/customer", customer_routes())
}
