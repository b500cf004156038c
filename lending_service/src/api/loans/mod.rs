use axum::{
    Router,
    routing::{get, post, put},
};

pub mod create_loan;
pub mod list_loans;
pub mod return_loan;

use crate::api::context::AppState;

/// Loan routes. Every route here requires an authenticated member; the
/// caller layers the group with the JWT middleware.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_loan::create_loan_handler))
        .route("/", get(list_loans::list_loans_handler))
        .route("/:id/return", put(return_loan::return_loan_handler))
}
