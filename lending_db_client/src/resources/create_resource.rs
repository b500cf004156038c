use anyhow::{Context, Result};
use models_lending::resource::{Resource, ResourceKind, ResourceStatus};
use sqlx::SqlitePool;

#[derive(Debug)]
pub struct CreateResourceOptions {
    pub title: String,
    pub kind: ResourceKind,
    pub status: ResourceStatus,
}

pub async fn create_resource(
    db: &SqlitePool,
    options: CreateResourceOptions,
) -> Result<Resource> {
    let resource = sqlx::query_as::<_, Resource>(
        r#"
        INSERT INTO resources (title, kind, status)
        VALUES (?1, ?2, ?3)
        RETURNING id, title, kind, status
        "#,
    )
    .bind(&options.title)
    .bind(options.kind)
    .bind(options.status)
    .fetch_one(db)
    .await
    .context("unable to create resource")?;

    Ok(resource)
}
