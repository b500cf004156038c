use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
};
use lending_db_client::users::get_user::get_user;
use models_lending::{
    response::ErrorResponse,
    user::{UserContext, UserProfile},
};
use sqlx::SqlitePool;

#[utoipa::path(
        get,
        tag = "account",
        path = "/api/profile",
        operation_id = "get_profile",
        responses(
            (status = 200, body = UserProfile),
            (status = 401, body = ErrorResponse),
            (status = 404, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, user_context), fields(user_id = user_context.user_id))]
pub async fn get_profile_handler(
    State(db): State<SqlitePool>,
    user_context: Extension<UserContext>,
) -> Result<Json<UserProfile>, (StatusCode, Json<ErrorResponse>)> {
    let user = get_user(&db, user_context.user_id).await.map_err(|e| {
        tracing::error!(error=?e, "unable to look up member");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("unable to fetch profile")),
        )
    })?;

    let Some(user) = user else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("member not found")),
        ));
    };

    Ok(Json(user.into()))
}
