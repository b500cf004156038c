use axum::{Json, extract::State, http::StatusCode};
use lending_db_client::users::{
    create_user::{CreateUserOptions, create_user},
    get_user_by_email::get_user_by_email,
};
use models_lending::{response::ErrorResponse, user::UserProfile};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

/// Shortest password we accept at registration
pub const MIN_PASSWORD_CHARS: usize = 6;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Display name of the new member
    pub name: String,
    pub email: String,
    /// Plain-text password, hashed before storage
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub user: UserProfile,
}

#[utoipa::path(
        post,
        tag = "account",
        path = "/api/register",
        operation_id = "register",
        responses(
            (status = 201, body = RegisterResponse),
            (status = 400, body = ErrorResponse),
            (status = 409, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, req), fields(email = %req.email))]
pub async fn register_handler(
    State(db): State<SqlitePool>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), (StatusCode, Json<ErrorResponse>)> {
    if req.name.is_empty() {
        return Err(bad_request("name must not be empty"));
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(bad_request("email must be a valid address"));
    }
    if req.password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(bad_request("password must be at least 6 characters"));
    }

    // Reject duplicate emails before paying for the hash
    match get_user_by_email(&db, &req.email).await {
        Ok(Some(_)) => {
            return Err((
                StatusCode::CONFLICT,
                Json(ErrorResponse::new("a member already exists for this email")),
            ));
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!(error=?e, "unable to check for existing member");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("unable to register member")),
            ));
        }
    }

    let password_hash = lending_auth::password::hash_password(&req.password).map_err(|e| {
        tracing::error!(error=?e, "unable to hash password");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("unable to register member")),
        )
    })?;

    let user = create_user(
        &db,
        CreateUserOptions {
            name: req.name,
            email: req.email,
            password_hash,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error=?e, "unable to create member");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("unable to register member")),
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse { user: user.into() }),
    ))
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message)))
}
