use axum::{
    Json,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use models_lending::{response::ErrorResponse, user::UserContext};

use crate::{error::LendingAuthError, headers, token::JwtKeys};

/// Decodes the JWT and attaches a [UserContext] with the member id to the
/// request. If every use case of a route requires an authenticated member,
/// layer the route with this middleware.
pub async fn handler(
    State(jwt_keys): State<JwtKeys>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let access_token = match headers::extract_access_token_from_request_headers(req.headers()) {
        Ok(access_token) => access_token,
        Err(e) => {
            tracing::trace!(error=?e, "unable to get access token");
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("unauthorized")),
            )
                .into_response());
        }
    };

    let claims = jwt_keys
        .validate_access_token(&access_token)
        .map_err(|e| match e {
            LendingAuthError::JwtExpired => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new("jwt expired")),
            )
                .into_response(),
            _ => {
                tracing::error!(error=?e, "unable to decode jwt");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorResponse::new("unauthorized")),
                )
                    .into_response()
            }
        })?;

    req.extensions_mut().insert(UserContext {
        user_id: claims.sub,
    });

    Ok(next.run(req).await)
}
