use axum::{
    Router,
    routing::{get, post, put},
};

pub mod get_profile;
pub mod login;
pub mod register;
pub mod update_profile;

use crate::api::context::AppState;

/// Public account routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register::register_handler))
        .route("/login", post(login::login_handler))
}

/// Routes that operate on the authenticated member. The caller layers these
/// with the JWT middleware.
pub fn profile_router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile::get_profile_handler))
        .route("/profile", put(update_profile::update_profile_handler))
}
