use axum::{Json, extract::State, http::StatusCode};
use lending_db_client::resources::create_resource::{CreateResourceOptions, create_resource};
use models_lending::{
    resource::{Resource, ResourceKind, ResourceStatus},
    response::ErrorResponse,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateResourceRequest {
    pub title: String,
    pub kind: ResourceKind,
    /// Initial availability, `disponible` when omitted
    #[serde(default = "default_status")]
    pub status: ResourceStatus,
}

fn default_status() -> ResourceStatus {
    ResourceStatus::Disponible
}

#[utoipa::path(
        post,
        tag = "resources",
        path = "/api/resources",
        operation_id = "create_resource",
        responses(
            (status = 201, body = Resource),
            (status = 400, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db, req), fields(title = %req.title))]
pub async fn create_resource_handler(
    State(db): State<SqlitePool>,
    Json(req): Json<CreateResourceRequest>,
) -> Result<(StatusCode, Json<Resource>), (StatusCode, Json<ErrorResponse>)> {
    if req.title.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("title must not be empty")),
        ));
    }

    let resource = create_resource(
        &db,
        CreateResourceOptions {
            title: req.title,
            kind: req.kind,
            status: req.status,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!(error=?e, "unable to create resource");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("unable to create resource")),
        )
    })?;

    Ok((StatusCode::CREATED, Json(resource)))
}
