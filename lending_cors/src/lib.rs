//! Shared CORS configuration for services that are called from the browser
//! frontend.

use std::time::Duration;

use http::{
    HeaderValue, Method,
    header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE},
};
use tower_http::cors::CorsLayer;

/// The dev-server origin of the frontend
static DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

/// Build the CORS layer used by every browser-facing router.
///
/// The allowed origin defaults to the local frontend dev server and can be
/// overridden with `CORS_ALLOWED_ORIGIN`.
pub fn cors_layer() -> CorsLayer {
    let origin = std::env::var("CORS_ALLOWED_ORIGIN")
        .ok()
        .and_then(|origin| HeaderValue::from_str(&origin).ok())
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ALLOWED_ORIGIN));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .expose_headers([CONTENT_LENGTH])
        .allow_credentials(true)
        .max_age(Duration::from_secs(12 * 60 * 60))
}
