use anyhow::{Context, Result};
use models_lending::resource::Resource;
use sqlx::SqlitePool;

pub async fn list_resources(db: &SqlitePool) -> Result<Vec<Resource>> {
    let resources = sqlx::query_as::<_, Resource>(
        "SELECT id, title, kind, status FROM resources ORDER BY id",
    )
    .fetch_all(db)
    .await
    .context("unable to list resources")?;

    Ok(resources)
}
