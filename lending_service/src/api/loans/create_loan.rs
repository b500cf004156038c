use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
};
use lending_db_client::loans::create_loan::{CreateLoanOptions, CreateLoanOutcome, create_loan};
use models_lending::{
    loan::{BorrowType, Loan},
    response::ErrorResponse,
    user::UserContext,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateLoanRequest {
    pub resource_id: i64,
    /// `sur_place` or `a_emporter`
    pub borrow_type: BorrowType,
}

#[utoipa::path(
        post,
        tag = "loans",
        path = "/api/loans",
        operation_id = "create_loan",
        responses(
            (status = 201, body = Loan),
            (status = 401, body = ErrorResponse),
            (status = 404, body = ErrorResponse),
            (status = 409, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, user_context, req), fields(user_id = user_context.user_id, resource_id = req.resource_id))]
pub async fn create_loan_handler(
    State(db): State<SqlitePool>,
    user_context: Extension<UserContext>,
    Json(req): Json<CreateLoanRequest>,
) -> Result<(StatusCode, Json<Loan>), (StatusCode, Json<ErrorResponse>)> {
    let outcome = create_loan(
        &db,
        CreateLoanOptions {
            user_id: user_context.user_id,
            resource_id: req.resource_id,
            borrow_type: req.borrow_type,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error=?e, "unable to create loan");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("unable to create loan")),
        )
    })?;

    match outcome {
        CreateLoanOutcome::Created(loan) => Ok((StatusCode::CREATED, Json(loan))),
        CreateLoanOutcome::ResourceNotFound => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("resource not found")),
        )),
        CreateLoanOutcome::ResourceUnavailable => Err((
            StatusCode::CONFLICT,
            Json(ErrorResponse::new("resource is not available")),
        )),
    }
}
