use axum::{Json, extract::State, http::StatusCode};
use lending_db_client::resources::list_resources::list_resources;
use models_lending::{resource::Resource, response::ErrorResponse};
use sqlx::SqlitePool;

#[utoipa::path(
        get,
        tag = "resources",
        path = "/api/resources",
        operation_id = "list_resources",
        responses(
            (status = 200, body = [Resource]),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db))]
pub async fn list_resources_handler(
    State(db): State<SqlitePool>,
) -> Result<Json<Vec<Resource>>, (StatusCode, Json<ErrorResponse>)> {
    let resources = list_resources(&db).await.map_err(|e| {
        tracing::error!(error=?e, "unable to list resources");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("unable to list resources")),
        )
    })?;

    Ok(Json(resources))
}
