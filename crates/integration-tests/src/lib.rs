//! Integration tests for Saffron Catering.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the storefront
//! cargo run -p saffron-storefront
//!
//! # Run integration tests (single-threaded: the stores are
//! # process-wide, so parallel tests would interleave)
//! cargo test -p saffron-integration-tests -- --ignored --test-threads=1
//! ```
//!
//! Tests are `#[ignore]`d by default because they require a running
//! server at `STOREFRONT_BASE_URL` (default `http://localhost:3000`).
