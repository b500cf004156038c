use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

/// Serve the built SPA bundle.
///
/// The bundle is mounted under `/static` (the SPA's history base) and any
/// path no other route claims falls back to `index.html`, so the
/// client-side router owns `/`, `/livres` and `/jeux`.
pub fn router(frontend_dist: &Path) -> Router {
    let index = ServeFile::new(frontend_dist.join("index.html"));
    let assets = ServeDir::new(frontend_dist).not_found_service(index.clone());

    Router::new()
        .nest_service("/static", assets)
        .fallback_service(index)
}
