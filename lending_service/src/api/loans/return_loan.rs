use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};
use lending_db_client::loans::return_loan::{ReturnLoanOutcome, return_loan};
use models_lending::{loan::Loan, response::ErrorResponse, user::UserContext};
use sqlx::SqlitePool;

#[utoipa::path(
        put,
        tag = "loans",
        path = "/api/loans/{id}/return",
        operation_id = "return_loan",
        responses(
            (status = 200, body = Loan),
            (status = 401, body = ErrorResponse),
            (status = 403, body = ErrorResponse),
            (status = 404, body = ErrorResponse),
            (status = 409, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, user_context), fields(user_id = user_context.user_id))]
pub async fn return_loan_handler(
    State(db): State<SqlitePool>,
    user_context: Extension<UserContext>,
    Path(loan_id): Path<i64>,
) -> Result<Json<Loan>, (StatusCode, Json<ErrorResponse>)> {
    let outcome = return_loan(&db, loan_id, user_context.user_id)
        .await
        .map_err(|e| {
            tracing::error!(error=?e, "unable to return loan");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("unable to return loan")),
            )
        })?;

    match outcome {
        ReturnLoanOutcome::Returned(loan) => Ok(Json(loan)),
        ReturnLoanOutcome::LoanNotFound => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("loan not found")),
        )),
        ReturnLoanOutcome::NotLoanOwner => Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse::new("loan belongs to another member")),
        )),
        ReturnLoanOutcome::AlreadyReturned => Err((
            StatusCode::CONFLICT,
            Json(ErrorResponse::new("loan is already returned")),
        )),
    }
}
