use axum::{Json, extract::State, http::StatusCode};
use lending_auth::token::JwtKeys;
use lending_db_client::users::get_user_by_email::get_user_by_email;
use models_lending::{response::ErrorResponse, user::UserProfile};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserProfile,
    /// Bearer token for subsequent authenticated calls
    pub token: String,
}

#[utoipa::path(
        post,
        tag = "account",
        path = "/api/login",
        operation_id = "login",
        responses(
            (status = 200, body = LoginResponse),
            (status = 401, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, jwt_keys, req), fields(email = %req.email))]
pub async fn login_handler(
    State(db): State<SqlitePool>,
    State(jwt_keys): State<JwtKeys>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, Json<ErrorResponse>)> {
    let user = match get_user_by_email(&db, &req.email).await {
        Ok(Some(user)) => user,
        // Unknown email and bad password answer the same so the endpoint
        // cannot be used to probe for accounts
        Ok(None) => return Err(invalid_credentials()),
        Err(e) => {
            tracing::error!(error=?e, "unable to look up member");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("unable to log in")),
            ));
        }
    };

    let password_matches = lending_auth::password::verify_password(
        &req.password,
        &user.password_hash,
    )
    .map_err(|e| {
        tracing::error!(error=?e, "unable to verify password");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("unable to log in")),
        )
    })?;

    if !password_matches {
        return Err(invalid_credentials());
    }

    let token = jwt_keys.issue_access_token(user.id).map_err(|e| {
        tracing::error!(error=?e, "unable to issue access token");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("unable to log in")),
        )
    })?;

    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        user: user.into(),
        token,
    }))
}

fn invalid_credentials() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ErrorResponse::new("invalid email or password")),
    )
}
