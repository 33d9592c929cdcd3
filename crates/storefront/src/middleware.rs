//! HTTP middleware for the storefront.
//!
//! Currently just rate limiting; tracing and CORS come straight from
//! `tower-http` layers in `main`.

use std::sync::Arc;

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Rate limiter layer type for Axum.
///
/// `SmartIpKeyExtractor` keys limits by the client IP taken from proxy
/// headers when present, falling back to the peer address (requires
/// serving with connect info).
pub type RateLimiterLayer =
    GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

/// Create rate limiter for the OTP request endpoint: ~10 requests per
/// minute per IP.
///
/// Configuration: 1 token every 6 seconds (replenish), burst of 5.
/// Keeps one client from flooding the delivery channel with codes.
///
/// # Panics
///
/// This function will not panic. The configuration uses only valid
/// positive integers (`per_second(6)` and `burst_size(5)`), which are
/// always accepted by `GovernorConfigBuilder`.
#[must_use]
pub fn otp_rate_limiter() -> RateLimiterLayer {
    let config = GovernorConfigBuilder::default()
        .key_extractor(SmartIpKeyExtractor)
        .per_second(6)
        .burst_size(5)
        .finish()
        .expect("rate limiter config with per_second(6) and burst_size(5) is valid");
    GovernorLayer::new(Arc::new(config))
}
