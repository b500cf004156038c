use axum::{Json, extract::State, http::StatusCode};
use lending_db_client::seed::fill_catalog;
use models_lending::response::ErrorResponse;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FillCatalogResponse {
    pub message: String,
    /// How many catalog entries were newly inserted
    pub added: u32,
}

#[utoipa::path(
        get,
        tag = "resources",
        path = "/api/resources/fill",
        operation_id = "fill_catalog",
        responses(
            (status = 200, body = FillCatalogResponse),
            (status = 500, body = ErrorResponse),
        )
    )]
#[tracing::instrument(skip(db))]
pub async fn fill_catalog_handler(
    State(db): State<SqlitePool>,
) -> Result<Json<FillCatalogResponse>, (StatusCode, Json<ErrorResponse>)> {
    let added = fill_catalog(&db).await.map_err(|e| {
        tracing::error!(error=?e, "unable to fill catalog");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new("unable to fill catalog")),
        )
    })?;

    Ok(Json(FillCatalogResponse {
        message: "demo catalog inserted".to_string(),
        added,
    }))
}
