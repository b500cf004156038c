use axum::{
    Router,
    routing::{get, post, put},
};

pub mod create_resource;
pub mod get_resource;
pub mod list_resources;
pub mod seed;
pub mod set_availability;

use crate::api::context::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_resources::list_resources_handler))
        .route("/", post(create_resource::create_resource_handler))
        // registered before "/:id" so the path segment is not read as an id
        .route("/fill", get(seed::fill_catalog_handler))
        .route("/:id", get(get_resource::get_resource_handler))
        .route(
            "/:id/disable",
            put(set_availability::disable_resource_handler),
        )
        .route(
            "/:id/enable",
            put(set_availability::enable_resource_handler),
        )
}
