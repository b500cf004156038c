use axum::{
    Json,
    extract::{Extension, State},
    http::StatusCode,
};
use lending_db_client::users::update_profile::{UpdateProfileOptions, update_profile};
use models_lending::{
    response::ErrorResponse,
    user::{UserContext, UserProfile},
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
}

#[utoipa::path(
        put,
        tag = "account",
        path = "/api/profile",
        operation_id = "update_profile",
        responses(
            (status = 200, body = UserProfile),
            (status = 400, body = ErrorResponse),
            (status = 401, body = ErrorResponse),
            (status = 404, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, user_context, req), fields(user_id = user_context.user_id))]
pub async fn update_profile_handler(
    State(db): State<SqlitePool>,
    user_context: Extension<UserContext>,
    Json(req): Json<UpdateProfileRequest>,
) -> Result<Json<UserProfile>, (StatusCode, Json<ErrorResponse>)> {
    if req.name.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("name must not be empty")),
        ));
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("email must be a valid address")),
        ));
    }

    let user = update_profile(
        &db,
        user_context.user_id,
        UpdateProfileOptions {
            name: req.name,
            email: req.email,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error=?e, "unable to update profile");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("unable to update profile")),
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
