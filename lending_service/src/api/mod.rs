use std::path::Path;

use anyhow::Context;
use axum::{Router, middleware::from_fn_with_state};
use lending_auth::token::JwtKeys;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{api::context::AppState, config::Config};

pub mod account;
pub mod context;
pub mod frontend;
pub mod health;
pub mod loans;
pub mod middleware;
pub mod resources;
pub mod swagger;

pub async fn setup_and_serve(config: &Config, app_state: AppState) -> anyhow::Result<()> {
    let app = service(app_state, &config.frontend_dist);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .context("failed to bind to port")?;

    tracing::info!(
        "lending service is up and running with environment {:?} on port {}",
        &config.environment,
        &config.port
    );

    axum::serve(listener, app.into_make_service())
        .await
        .context("error starting service")
}

/// Assemble the full router: API, health, docs and the static frontend.
pub fn service(app_state: AppState, frontend_dist: &Path) -> Router {
    let cors = lending_cors::cors_layer();

    Router::new()
        .nest("/api", api_router(app_state.jwt_keys.clone()))
        .with_state(app_state)
        .merge(health::router().layer(cors.clone()))
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", swagger::ApiDoc::openapi()))
        .merge(frontend::router(frontend_dist))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// The routes nested under `/api`. Profile and loan routes require an
/// authenticated member; everything else is public.
pub fn api_router(jwt_keys: JwtKeys) -> Router<AppState> {
    Router::new()
        .merge(account::router())
        .nest("/resources", resources::router())
        .merge(
            Router::new()
                .merge(account::profile_router())
                .nest("/loans", loans::router())
                .layer(from_fn_with_state(jwt_keys, middleware::decode_jwt)),
        )
}
