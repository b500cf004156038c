use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use lending_db_client::resources::get_resource::get_resource;
use models_lending::{resource::Resource, response::ErrorResponse};
use sqlx::SqlitePool;

#[utoipa::path(
        get,
        tag = "resources",
        path = "/api/resources/{id}",
        operation_id = "get_resource",
        responses(
            (status = 200, body = Resource),
            (status = 404, body = ErrorResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db))]
pub async fn get_resource_handler(
    State(db): State<SqlitePool>,
    Path(resource_id): Path<i64>,
) -> Result<Json<Resource>, (StatusCode, Json<ErrorResponse>)> {
    let resource = get_resource(&db, resource_id).await.map_err(|e| {
        tracing::error!(error=?e, "unable to look up resource");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("unable to fetch resource")),
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
