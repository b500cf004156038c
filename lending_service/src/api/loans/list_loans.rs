use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
};
use lending_db_client::loans::get_loans::get_loans_for_user;
use models_lending::{loan::Loan, response::ErrorResponse, user::UserContext};
use sqlx::SqlitePool;

#[utoipa::path(
        get,
        tag = "loans",
        path = "/api/loans",
        operation_id = "list_loans",
        responses(
            (status = 200, body = [Loan]),
            (status = 401, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, user_context), fields(user_id = user_context.user_id))]
pub async fn list_loans_handler(
    State(db): State<SqlitePool>,
    user_context: Extension<UserContext>,
) -> Result<Json<Vec<Loan>>, (StatusCode, Json<ErrorResponse>)> {
    let loans = get_loans_for_user(&db, user_context.user_id)
        .await
        .map_err(|e| {
            tracing::error!(error=?e, "unable to list loans");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("unable to list loans")),
            )
        })?;

    Ok(Json(loans))
}
