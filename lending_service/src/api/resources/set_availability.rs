use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use lending_db_client::resources::set_status::set_resource_status;
use models_lending::{
    resource::{Resource, ResourceStatus},
    response::ErrorResponse,
};
use sqlx::SqlitePool;

#[utoipa::path(
        put,
        tag = "resources",
        path = "/api/resources/{id}/disable",
        operation_id = "disable_resource",
        responses(
            (status = 200, body = Resource),
            (status = 404, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db))]
pub async fn disable_resource_handler(
    State(db): State<SqlitePool>,
    Path(resource_id): Path<i64>,
) -> Result<Json<Resource>, (StatusCode, Json<ErrorResponse>)> {
    set_availability(&db, resource_id, ResourceStatus::Indisponible).await
}

#[utoipa::path(
        put,
        tag = "resources",
        path = "/api/resources/{id}/enable",
        operation_id = "enable_resource",
        responses(
            (status = 200, body = Resource),
            (status = 404, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db))]
pub async fn enable_resource_handler(
    State(db): State<SqlitePool>,
    Path(resource_id): Path<i64>,
) -> Result<Json<Resource>, (StatusCode, Json<ErrorResponse>)> {
    set_availability(&db, resource_id, ResourceStatus::Disponible).await
}

async fn set_availability(
    db: &SqlitePool,
    resource_id: i64,
    status: ResourceStatus,
) -> Result<Json<Resource>, (StatusCode, Json<ErrorResponse>)> {
    let resource = set_resource_status(db, resource_id, status)
        .await
        .map_err(|e| {
            tracing::error!(error=?e, "unable to update resource status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("unable to update resource")),
            )
        })?;

    let Some(resource) = resource else {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new("resource not found")),
        ));
    };

    Ok(Json(resource))
}
