use anyhow::{Context, Result};
use models_lending::resource::{Resource, ResourceStatus};
use sqlx::SqlitePool;

/// Set the availability of a resource. Returns `None` when the resource
/// does not exist.
pub async fn set_resource_status(
    db: &SqlitePool,
    resource_id: i64,
    status: ResourceStatus,
) -> Result<Option<Resource>> {
    let resource = sqlx::query_as::<_, Resource>(
        r#"
        UPDATE resources
        SET status = ?1
        WHERE id = ?2
        RETURNING id, title, kind, status
        "#,
    )
    .bind(status)
    .bind(resource_id)
    .fetch_optional(db)
    .await
    .context("unable to update resource status")?;

    Ok(resource)
}
