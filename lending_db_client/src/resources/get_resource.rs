use anyhow::{Context, Result};
use models_lending::resource::Resource;
use sqlx::SqlitePool;

pub async fn get_resource(db: &SqlitePool, resource_id: i64) -> Result<Option<Resource>> {
    let resource = sqlx::query_as::<_, Resource>(
        "SELECT id, title, kind, status FROM resources WHERE id = ?1",
    )
    .bind(resource_id)
    .fetch_optional(db)
    .await
    .context("unable to look up resource")?;

    Ok(resource)
}
