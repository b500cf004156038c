use anyhow::{Context, Result};
use models_lending::user::User;
use sqlx::SqlitePool;

#[derive(Debug)]
pub struct CreateUserOptions {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

pub async fn create_user(db: &SqlitePool, options: CreateUserOptions) -> Result<User> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (name, email, password_hash)
        VALUES (?1, ?2, ?3)
        RETURNING id, name, email, password_hash
        "#,
    )
    .bind(&options.name)
    .bind(&options.email)
    .bind(&options.password_hash)
    .fetch_one(db)
    .await
    .context("unable to create user")?;

    Ok(user)
}
